//! Unit tests for et-routes.

use crate::{RouteIndex, RouteIndexBuilder};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Three-route index with a duplicated pair listed in both directions.
fn tiny_index() -> RouteIndex {
    let mut b = RouteIndexBuilder::new();
    b.add_route("Alpha", "Beta", 10.0)
        .add_route("Beta", "Alpha", 99.0)
        .add_route("Gamma", "Alpha", 5.0);
    b.build().unwrap()
}

// ── normalize ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod normalize {
    use std::cmp::Ordering;

    use crate::{collation_key, normalize};

    #[test]
    fn strips_accents_and_case() {
        assert_eq!(normalize("São Paulo, SP"), "sao paulo, sp");
        assert_eq!(normalize("FLORIANÓPOLIS, SC"), "florianopolis, sc");
        assert_eq!(normalize("Foz do Iguaçu, PR"), "foz do iguacu, pr");
    }

    #[test]
    fn trims_whitespace() {
        assert_eq!(normalize("  Niterói, RJ \t"), "niteroi, rj");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn precomposed_and_decomposed_agree() {
        // "ã" as one code point vs "a" + combining tilde.
        assert_eq!(normalize("S\u{00E3}o"), normalize("Sa\u{0303}o"));
    }

    #[test]
    fn collation_ignores_accents_first() {
        assert_eq!(collation_key("Belém, PA", "Belo Horizonte, MG"), Ordering::Less);
        assert_eq!(collation_key("São Luís, MA", "Santos, SP"), Ordering::Greater);
    }

    #[test]
    fn collation_breaks_ties_on_exact_text() {
        assert_ne!(collation_key("Sao Paulo", "São Paulo"), Ordering::Equal);
        assert_eq!(collation_key("Recife, PE", "Recife, PE"), Ordering::Equal);
    }
}

// ── find_distance ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod find_distance {
    use super::*;

    #[test]
    fn known_pair() {
        let idx = RouteIndex::brazil();
        assert_eq!(idx.find_distance("Curitiba, PR", "Sinop, MT"), Some(2340.0));
    }

    #[test]
    fn reversed_pair() {
        let idx = RouteIndex::brazil();
        assert_eq!(idx.find_distance("Sinop, MT", "Curitiba, PR"), Some(2340.0));
    }

    #[test]
    fn case_and_accent_insensitive() {
        let idx = RouteIndex::brazil();
        assert_eq!(idx.find_distance("São Paulo, SP", "curitiba, pr"), Some(408.0));
        assert_eq!(idx.find_distance("sao paulo, sp", "CURITIBA, PR"), Some(408.0));
        assert_eq!(idx.find_distance("  belem, pa ", "sao luis, ma"), Some(806.0));
    }

    #[test]
    fn symmetric_for_every_known_route() {
        let idx = RouteIndex::brazil();
        for route in idx.routes() {
            let fwd = idx.find_distance(&route.origin, &route.destination);
            let rev = idx.find_distance(&route.destination, &route.origin);
            assert!(fwd.is_some(), "{} -> {} missing", route.origin, route.destination);
            assert_eq!(fwd, rev, "{} <-> {}", route.origin, route.destination);
        }
    }

    #[test]
    fn unknown_pair_is_none() {
        let idx = RouteIndex::brazil();
        assert_eq!(idx.find_distance("Manaus, AM", "Gramado, RS"), None);
    }

    #[test]
    fn blank_inputs_are_none() {
        let idx = RouteIndex::brazil();
        assert_eq!(idx.find_distance("", "Sinop, MT"), None);
        assert_eq!(idx.find_distance("Curitiba, PR", ""), None);
        assert_eq!(idx.find_distance("   ", "  "), None);
    }

    #[test]
    fn partial_names_do_not_match() {
        let idx = RouteIndex::brazil();
        assert_eq!(idx.find_distance("Curitiba", "Sinop"), None);
    }

    #[test]
    fn first_match_in_table_order_wins() {
        let idx = tiny_index();
        assert_eq!(idx.find_distance("Alpha", "Beta"), Some(10.0));
        assert_eq!(idx.find_distance("Beta", "Alpha"), Some(10.0));
    }

    #[test]
    fn empty_index_always_misses() {
        let idx = RouteIndex::empty();
        assert!(idx.is_empty());
        assert_eq!(idx.find_distance("Alpha", "Beta"), None);
    }

    #[test]
    fn resolver_trait_delegates() {
        use crate::DistanceResolver;
        let idx = RouteIndex::brazil();
        let resolver: &dyn DistanceResolver = &idx;
        assert_eq!(resolver.find_distance("Recife, PE", "Natal, RN"), Some(286.0));
    }
}

// ── all_cities ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod all_cities {
    use super::*;

    #[test]
    fn brazil_city_list() {
        let cities = RouteIndex::brazil().all_cities();
        assert_eq!(cities.len(), 29);
        assert_eq!(&cities[..5], [
            "Aracaju, SE",
            "Belém, PA",
            "Belo Horizonte, MG",
            "Boa Vista, RR",
            "Brasília, DF",
        ]);
        assert_eq!(cities.last().map(String::as_str), Some("Vitória, ES"));
    }

    #[test]
    fn accented_names_sort_by_base_letter() {
        let cities = RouteIndex::brazil().all_cities();
        let pos = |name: &str| cities.iter().position(|c| c == name).unwrap();
        assert!(pos("Santos, SP") < pos("São Luís, MA"));
        assert!(pos("São Luís, MA") < pos("São Paulo, SP"));
        assert!(pos("São Paulo, SP") < pos("Sinop, MT"));
    }

    #[test]
    fn deduplicated_by_exact_string() {
        let cities = tiny_index().all_cities();
        assert_eq!(cities, ["Alpha", "Beta", "Gamma"]);
    }

    #[test]
    fn spelling_variants_both_listed() {
        let mut b = RouteIndexBuilder::new();
        b.add_route("São Paulo", "Santos", 72.0)
            .add_route("Sao Paulo", "Campinas", 95.0);
        let cities = b.build().unwrap().all_cities();
        assert_eq!(cities.len(), 4);
    }
}

// ── RouteIndexBuilder ─────────────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use crate::{BRAZIL_ROUTES, RouteError, RouteIndex, RouteIndexBuilder};

    #[test]
    fn builtin_table_passes_validation() {
        let mut b = RouteIndexBuilder::new();
        for &(o, d, km) in BRAZIL_ROUTES {
            b.add_route(o, d, km);
        }
        let idx = b.build().unwrap();
        assert_eq!(idx.len(), RouteIndex::brazil().len());
    }

    #[test]
    fn rejects_non_positive_distance() {
        let mut b = RouteIndexBuilder::new();
        b.add_route("A", "B", 1.0).add_route("C", "D", 0.0);
        match b.build() {
            Err(RouteError::InvalidDistance { index, distance_km, .. }) => {
                assert_eq!(index, 1);
                assert_eq!(distance_km, 0.0);
            }
            other => panic!("expected InvalidDistance, got {other:?}"),
        }
    }

    #[test]
    fn rejects_nan_distance() {
        let mut b = RouteIndexBuilder::new();
        b.add_route("A", "B", f64::NAN);
        assert!(matches!(b.build(), Err(RouteError::InvalidDistance { .. })));
    }

    #[test]
    fn rejects_blank_names() {
        let mut b = RouteIndexBuilder::new();
        b.add_route("  ", "B", 1.0);
        assert_eq!(b.build().unwrap_err(), RouteError::EmptyName { index: 0, which: "origin" });

        let mut b = RouteIndexBuilder::new();
        b.add_route("A", "", 1.0);
        assert_eq!(
            b.build().unwrap_err(),
            RouteError::EmptyName { index: 0, which: "destination" }
        );
    }
}
