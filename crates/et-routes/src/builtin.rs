//! Compiled-in table of Brazilian intercity road distances.
//!
//! `(origin, destination, distance_km)`.  Each pair is listed once; lookups
//! are bidirectional so the reverse direction is implied.

pub const BRAZIL_ROUTES: &[(&str, &str, f64)] = &[
    ("Curitiba, PR", "Sinop, MT", 2340.0),

    // Sudeste
    ("São Paulo, SP", "Rio de Janeiro, RJ", 430.0),
    ("São Paulo, SP", "Belo Horizonte, MG", 586.0),
    ("São Paulo, SP", "Brasília, DF", 1015.0),
    ("São Paulo, SP", "Campinas, SP", 95.0),
    ("São Paulo, SP", "Santos, SP", 72.0),
    ("São Paulo, SP", "Curitiba, PR", 408.0),
    ("Rio de Janeiro, RJ", "Niterói, RJ", 13.0),
    ("Rio de Janeiro, RJ", "Belo Horizonte, MG", 434.0),
    ("Rio de Janeiro, RJ", "Vitória, ES", 521.0),
    ("Belo Horizonte, MG", "Ouro Preto, MG", 100.0),
    ("Vitória, ES", "Vila Velha, ES", 12.0),

    // Sul
    ("Curitiba, PR", "Florianópolis, SC", 300.0),
    ("Curitiba, PR", "Porto Alegre, RS", 711.0),
    ("Curitiba, PR", "Foz do Iguaçu, PR", 637.0),
    ("Florianópolis, SC", "Porto Alegre, RS", 476.0),
    ("Porto Alegre, RS", "Gramado, RS", 103.0),

    // Centro-Oeste
    ("Brasília, DF", "Goiânia, GO", 209.0),
    ("Goiânia, GO", "Cuiabá, MT", 934.0),
    ("Campo Grande, MS", "Cuiabá, MT", 694.0),

    // Nordeste e Norte
    ("Salvador, BA", "Aracaju, SE", 356.0),
    ("Salvador, BA", "Recife, PE", 805.0),
    ("Recife, PE", "Maceió, AL", 257.0),
    ("Recife, PE", "Natal, RN", 286.0),
    ("Fortaleza, CE", "Natal, RN", 537.0),
    ("Manaus, AM", "Boa Vista, RR", 785.0),
    ("Belém, PA", "São Luís, MA", 806.0),
];
