//! Tests for the equipment record extractor
//!
//! Manifests are pasted by hand from an inventory export, so these tests
//! focus on tolerance: reordered fields, missing fields and MACs written in
//! unexpected places.

use macsep::core::models::UNASSIGNED_LOCATION;
use macsep::core::services::extractor::{Extractor, extract, extract_model, split_blocks};
use macsep::core::services::sample::EXAMPLE_INVENTORY_EXPORT;
use macsep::parser::MatcherChain;

use crate::common::{export_block, manifest, simple_block};

// =============================================================================
// BLOCK SPLITTING TESTS
// =============================================================================

#[test]
fn test_split_on_blank_lines() {
    let text = "a\nb\n\nc\n\n\n\nd";
    assert_eq!(split_blocks(text), vec!["a\nb", "c", "d"]);
}

#[test]
fn test_whitespace_only_line_separates_blocks() {
    assert_eq!(split_blocks("a\n  \t\nb").len(), 2);
}

#[test]
fn test_crlf_line_endings() {
    let text = "MAC: 001122334455\r\nLOCAL ESTOQUE: A1\r\n\r\nMAC: AABBCCDDEEFF\r\nLOCAL ESTOQUE: B2";
    let extraction = extract(text);
    assert_eq!(extraction.records.len(), 2);
    assert_eq!(extraction.records[1].location, "B2");
}

#[test]
fn test_empty_manifest() {
    let extraction = extract("  \n\n ");
    assert_eq!(extraction.blocks_attempted, 0);
    assert!(extraction.records.is_empty());
}

// =============================================================================
// FULL EXPORT TESTS
// =============================================================================

#[test]
fn test_export_block_fields() {
    let extraction = extract(EXAMPLE_INVENTORY_EXPORT);
    assert_eq!(extraction.blocks_attempted, 2);

    let record = &extraction.records[0];
    assert_eq!(record.mac.as_str(), "200889BDFC8E");
    assert_eq!(record.model, "2091071 GPON ONU WIFI ZTE F670L");
    assert_eq!(record.serial_number, "ZTEGD42C3DB6");
    assert_eq!(record.location, "C.A ALLREDE - SANTA MARIA-DF");
    assert_eq!(record.sale_value.as_deref(), Some("R$ 279.74"));
    assert_eq!(record.kind.as_deref(), Some("Patrimônio"));
    assert_eq!(record.refurbished.as_deref(), Some("NÃO"));
}

#[test]
fn test_summary_combines_model_serial_location() {
    let record = &extract(&export_block("00:11:22:33:44:55", "Prateleira A1")).records[0];
    assert_eq!(
        record.summary(),
        "2091071 GPON ONU WIFI ZTE F670L - S/N: ZTEGD42C3DB6 - Prateleira A1"
    );
}

#[test]
fn test_fields_joined_by_spaces_instead_of_tabs() {
    let block = "LOCAL ESTOQUE: Gaveta B2 NÚMERO DE SÉRIE: SN123 TIPO: Comodato\nMAC: 001122334455";
    let record = &extract(block).records[0];
    assert_eq!(record.location, "Gaveta B2");
    assert_eq!(record.serial_number, "SN123");
    assert_eq!(record.kind.as_deref(), Some("Comodato"));
}

#[test]
fn test_labels_without_accents() {
    let block = "MAC: 001122334455\nNUMERO DE SERIE: SN9\nLOCAL ESTOQUE: A1";
    assert_eq!(extract(block).records[0].serial_number, "SN9");
}

// =============================================================================
// ORDER AND MISSING FIELD TESTS
// =============================================================================

#[test]
fn test_label_order_invariance() {
    let canonical = "MAC: 00:11:22:33:44:55\n\
                     NÚMERO DE SÉRIE: SN-1\n\
                     LOCAL ESTOQUE: Prateleira A1\n\
                     VALOR VENDA: R$ 10,00\n\
                     TIPO: Patrimônio\n\
                     RECONDICIONADO: SIM";
    let shuffled = "TIPO: Patrimônio\n\
                    LOCAL ESTOQUE: Prateleira A1\n\
                    RECONDICIONADO: SIM\n\
                    MAC: 00:11:22:33:44:55\n\
                    VALOR VENDA: R$ 10,00\n\
                    NÚMERO DE SÉRIE: SN-1";
    let tabbed = "RECONDICIONADO: SIM\tVALOR VENDA: R$ 10,00\tTIPO: Patrimônio\n\
                  NÚMERO DE SÉRIE: SN-1\tMAC: 00:11:22:33:44:55\tLOCAL ESTOQUE: Prateleira A1";

    let a = extract(canonical).records;
    let b = extract(shuffled).records;
    let c = extract(tabbed).records;
    assert_eq!(a.len(), 1);
    assert_eq!(a, b);
    assert_eq!(a, c);
}

#[test]
fn test_missing_location_uses_sentinel() {
    let block = "MAC: 001122334455\n\
                 NÚMERO DE SÉRIE: SN-1\n\
                 VALOR VENDA: R$ 10,00\n\
                 TIPO: Patrimônio\n\
                 RECONDICIONADO: NÃO";
    let record = &extract(block).records[0];
    assert_eq!(record.location, UNASSIGNED_LOCATION);
    assert!(record.is_unassigned());
}

#[test]
fn test_blank_location_uses_sentinel() {
    let record = &extract("MAC: 001122334455\nLOCAL ESTOQUE:   \tTIPO: X").records[0];
    assert_eq!(record.location, UNASSIGNED_LOCATION);
}

#[test]
fn test_location_cut_at_next_label() {
    let record = &extract("MAC: 001122334455\nLOCAL ESTOQUE: Depósito G7 VALOR VENDA: R$ 5").records[0];
    assert_eq!(record.location, "Depósito G7");
    assert_eq!(record.sale_value.as_deref(), Some("R$ 5"));
}

#[test]
fn test_optional_fields_absent() {
    let record = &extract(&simple_block("001122334455", "A1")).records[0];
    assert_eq!(record.model, "");
    assert_eq!(record.serial_number, "");
    assert_eq!(record.sale_value, None);
    assert_eq!(record.kind, None);
    assert_eq!(record.refurbished, None);
}

// =============================================================================
// MAC FALLBACK TESTS
// =============================================================================

#[test]
fn test_bare_colon_octets_without_label() {
    let record = &extract("Roteador 00:11:22:33:44:55\nLOCAL ESTOQUE: A1").records[0];
    assert_eq!(record.mac.as_str(), "001122334455");
    assert_eq!(record.model, "Roteador 00:11:22:33:44:55");
}

#[test]
fn test_bare_hex_run_without_label() {
    let record = &extract("LOCAL ESTOQUE: A1\nSN 001122AABBCC").records[0];
    assert_eq!(record.mac.as_str(), "001122AABBCC");
}

#[test]
fn test_invalid_labeled_mac_falls_through_to_later_candidate() {
    let block = "MAC: 00:11:22\nLOCAL ESTOQUE: A1\nEndereço 66:77:88:99:AA:BB";
    assert_eq!(extract(block).records[0].mac.as_str(), "66778899AABB");
}

#[test]
fn test_block_without_valid_mac_is_discarded() {
    let text = manifest([
        simple_block("001122334455", "A1"),
        simple_block("ZZ:ZZ:ZZ:ZZ:ZZ:ZZ", "B2"),
        simple_block("0011223344556", "C3"),
        simple_block("AABBCCDDEEFF", "D4"),
    ]);
    let extraction = extract(&text);
    assert_eq!(extraction.blocks_attempted, 4);
    assert_eq!(extraction.blocks_discarded(), 2);
    let locations: Vec<&str> = extraction.records.iter().map(|r| r.location.as_str()).collect();
    assert_eq!(locations, vec!["A1", "D4"]);
}

#[test]
fn test_extraction_diagnostics() {
    let text = manifest([
        simple_block("000000000001", "A1"),
        simple_block("000000000002", "A1"),
        simple_block("000000000003", "B2"),
    ]);
    let extraction = extract(&text);
    assert_eq!(extraction.distinct_locations(), 2);
    assert_eq!(extraction.blocks_discarded(), 0);
}

#[test]
fn test_empty_chain_finds_nothing() {
    let extractor = Extractor::new(MatcherChain::empty());
    let extraction = extractor.extract(&simple_block("001122334455", "A1"));
    assert_eq!(extraction.blocks_attempted, 1);
    assert!(extraction.records.is_empty());
}

// =============================================================================
// MODEL LINE TESTS
// =============================================================================

#[test]
fn test_model_with_code_and_own_id() {
    assert_eq!(
        extract_model("(123) ONU HUAWEI HG8145 - ID Próprio: ABC"),
        "123 ONU HUAWEI HG8145"
    );
}

#[test]
fn test_model_without_code() {
    assert_eq!(extract_model("Roteador TP-Link Archer C6"), "Roteador TP-Link Archer C6");
}

#[test]
fn test_model_empty_for_field_line() {
    assert_eq!(extract_model("MAC: 001122334455"), "");
}
