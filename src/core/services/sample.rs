//! Example and random manifest data for trying the tool out

use rand::Rng;

/// Locations used by [`generate_sample`]
pub const SAMPLE_LOCATIONS: [&str; 8] = [
    "Prateleira A1",
    "Gaveta B2",
    "Armário C3",
    "Caixa D4",
    "Estante E5",
    "Compartimento F6",
    "Depósito G7",
    "Almoxarifado H8",
];

/// A well-formed manifest
pub const EXAMPLE_MANIFEST: &str = "MAC: 001122334455
LOCAL ESTOQUE: Prateleira A1

MAC: AABBCCDDEEFF
LOCAL ESTOQUE: Gaveta B2

MAC: 123456789ABC
LOCAL ESTOQUE: Armário C3

MAC: DEADBEEFCAFE
LOCAL ESTOQUE: Caixa D4

MAC: 112233445566
LOCAL ESTOQUE: Prateleira A1

MAC: 778899AABBCC
LOCAL ESTOQUE: Gaveta B2";

/// A manifest with an invalid MAC, a blank location and a duplicate
pub const EXAMPLE_MANIFEST_WITH_ERRORS: &str = "MAC: 001122334455
LOCAL ESTOQUE: Prateleira A1

MAC: INVALID_MAC
LOCAL ESTOQUE: Gaveta B2

MAC: 123456789ABC
LOCAL ESTOQUE:

MAC: DEADBEEFCAFE
LOCAL ESTOQUE: Caixa D4

MAC: 001122334455
LOCAL ESTOQUE: Prateleira A1

MAC: 778899AABBCC
LOCAL ESTOQUE: Gaveta B2";

/// A manifest in the inventory system's export layout
pub const EXAMPLE_INVENTORY_EXPORT: &str = "(2091071) GPON ONU WIFI ZTE F670L - ID Próprio: ZTE3BJNQ3U18521
VALOR VENDA: R$ 279.74\tRECONDICIONADO: NÃO\tTIPO: Patrimônio
LOCAL ESTOQUE: C.A ALLREDE - SANTA MARIA-DF\tNÚMERO DE SÉRIE: ZTEGD42C3DB6\tEPI CA: N/A
REPARTIÇÃO: GERAL\tMAC: 20:08:89:BD:FC:8E\tDATA VALIDADE: N/A
OBSERVAÇÕES: N/A

(2091072) GPON ONU WIFI ZTE F670L - ID Próprio: ZTE3BJNQ3U18522
VALOR VENDA: R$ 279.74\tRECONDICIONADO: NÃO\tTIPO: Patrimônio
LOCAL ESTOQUE: CD - 02 ALLREDE - ÁGUAS LINDAS - GO\tNÚMERO DE SÉRIE: ZTEGD42C3DB7\tEPI CA: N/A
REPARTIÇÃO: GERAL\tMAC: 74:6F:88:06:1D:24\tDATA VALIDADE: N/A
OBSERVAÇÕES: N/A";

/// A target list to check against [`EXAMPLE_INVENTORY_EXPORT`]
pub const EXAMPLE_TARGETS: &str = "200889BDFC12
746F88061D24
746F883CA314
94286F9CF555
504289FA560B";

/// Generate `count` random `MAC:` / `LOCAL ESTOQUE:` blocks
pub fn generate_sample<R: Rng>(rng: &mut R, count: usize) -> String {
    (0..count)
        .map(|_| {
            let mac: String = (0..6).map(|_| format!("{:02X}", rng.random::<u8>())).collect();
            let location = SAMPLE_LOCATIONS[rng.random_range(0..SAMPLE_LOCATIONS.len())];
            format!("MAC: {mac}\nLOCAL ESTOQUE: {location}")
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}
