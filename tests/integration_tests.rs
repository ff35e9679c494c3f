use geneflow::{translate_request, DnaSequence, RequestError, RnaSequence};

#[test]
fn test_full_pipeline_through_public_api() {
    let template: DnaSequence = "ATGTTTTAA".parse().unwrap();
    let result = template.translate_full();

    assert_eq!(result.template_dna.to_string(), "ATGTTTTAA");
    assert_eq!(result.complementary_dna.to_string(), "TACAAAATT");
    assert_eq!(result.mrna.to_string(), "AUGUUUUAA");
    assert_eq!(result.polypeptide.to_string(), "Met-Phe-STOP");
}

#[test]
fn test_stages_compose_like_the_entry_point() {
    let template: DnaSequence = "GATTACA".parse().unwrap();

    let complement = template.complement();
    let mrna = complement.transcribe();
    let polypeptide = mrna.translate();

    let result = template.translate_full();
    assert_eq!(result.complementary_dna, complement);
    assert_eq!(result.mrna, mrna);
    assert_eq!(result.polypeptide, polypeptide);
}

#[test]
fn test_standalone_rna_translation() {
    let mrna: RnaSequence = "augcccuga".parse().unwrap();
    assert_eq!(mrna.translate().to_string(), "Met-Pro-STOP");
}

#[test]
fn test_request_validation_categories() {
    assert!(matches!(
        translate_request(None),
        Err(RequestError::MissingSequence)
    ));
    assert!(matches!(
        translate_request(Some("ATXG")),
        Err(RequestError::InvalidSequence(_))
    ));

    let ok = translate_request(Some("atg")).unwrap();
    assert_eq!(ok.template_dna.to_string(), "ATG");
}

#[cfg(feature = "serde")]
mod serde_contract {
    use geneflow::translate_request;
    use serde_json::{json, to_value};

    #[test]
    fn test_result_payload_shape() {
        let result = translate_request(Some("ATG")).unwrap();

        assert_eq!(
            to_value(&result).unwrap(),
            json!({
                "templateDNA": "ATG",
                "complementaryDNA": "TAC",
                "mRNA": "AUG",
                "polypeptide": "Met",
            })
        );
    }

    #[test]
    fn test_polypeptide_joins_with_dashes() {
        let result = translate_request(Some("ATGTTTTAA")).unwrap();
        let value = to_value(&result).unwrap();

        assert_eq!(value["polypeptide"], "Met-Phe-STOP");
    }

    #[test]
    fn test_unresolvable_polypeptide_is_empty_string() {
        // two bases: no complete codon resolves
        let result = translate_request(Some("AT")).unwrap();
        let value = to_value(&result).unwrap();

        assert_eq!(value["polypeptide"], "");
    }

    #[test]
    fn test_sequences_deserialize_from_strings() {
        use geneflow::{DnaSequence, Polypeptide, RnaSequence};

        let dna: DnaSequence = serde_json::from_str("\"ATG\"").unwrap();
        assert_eq!(dna.to_string(), "ATG");

        let rna: RnaSequence = serde_json::from_str("\"AUG\"").unwrap();
        assert_eq!(rna.to_string(), "AUG");

        let polypeptide: Polypeptide = serde_json::from_str("\"Met-Phe-STOP\"").unwrap();
        assert_eq!(polypeptide.to_string(), "Met-Phe-STOP");

        assert!(serde_json::from_str::<DnaSequence>("\"AUG\"").is_err());
    }
}
