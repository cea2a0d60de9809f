//! Unit tests for et-core primitives.

#[cfg(test)]
mod transport {
    use crate::{EtError, TransportMode};

    #[test]
    fn index_matches_all_order() {
        for (i, mode) in TransportMode::ALL.into_iter().enumerate() {
            assert_eq!(mode.index(), i);
        }
    }

    #[test]
    fn parse_known_ids() {
        assert_eq!("bicycle".parse::<TransportMode>().unwrap(), TransportMode::Bicycle);
        assert_eq!("car".parse::<TransportMode>().unwrap(), TransportMode::Car);
        assert_eq!("bus".parse::<TransportMode>().unwrap(), TransportMode::Bus);
        assert_eq!("truck".parse::<TransportMode>().unwrap(), TransportMode::Truck);
    }

    #[test]
    fn parse_unknown_id() {
        assert_eq!(
            "rocket".parse::<TransportMode>(),
            Err(EtError::UnknownMode("rocket".into()))
        );
        // Ids are exact; no case folding.
        assert!("Car".parse::<TransportMode>().is_err());
    }

    #[test]
    fn display_round_trips_through_parse() {
        for mode in TransportMode::ALL {
            assert_eq!(mode.to_string().parse::<TransportMode>().unwrap(), mode);
        }
    }

    #[test]
    fn baseline_is_car() {
        assert_eq!(TransportMode::BASELINE, TransportMode::Car);
    }
}

#[cfg(test)]
mod factors {
    use crate::{EmissionFactors, TransportMode};

    #[test]
    fn default_table() {
        let f = EmissionFactors::default();
        assert_eq!(f.factor(TransportMode::Bicycle), 0.0);
        assert_eq!(f.factor(TransportMode::Car), 0.12);
        assert_eq!(f.factor(TransportMode::Bus), 0.089);
        assert_eq!(f.factor(TransportMode::Truck), 0.96);
    }

    #[test]
    fn one_factor_per_mode() {
        let f = EmissionFactors::default();
        assert_eq!(f.iter().count(), TransportMode::ALL.len());
    }

    #[test]
    fn negative_factor_rejected() {
        assert!(EmissionFactors::new(0.0, 0.12, -0.1, 0.96).is_err());
        assert!(EmissionFactors::default().with_factor(TransportMode::Car, -1.0).is_err());
    }

    #[test]
    fn non_finite_factor_rejected() {
        assert!(EmissionFactors::new(f64::NAN, 0.12, 0.089, 0.96).is_err());
        assert!(EmissionFactors::new(0.0, f64::INFINITY, 0.089, 0.96).is_err());
    }

    #[test]
    fn with_factor_replaces_one_entry() {
        let f = EmissionFactors::default()
            .with_factor(TransportMode::Bus, 0.05)
            .unwrap();
        assert_eq!(f.factor(TransportMode::Bus), 0.05);
        assert_eq!(f.factor(TransportMode::Car), 0.12);
    }
}

#[cfg(test)]
mod credit {
    use crate::CarbonCreditPolicy;

    #[test]
    fn default_policy() {
        let p = CarbonCreditPolicy::default();
        assert_eq!(p.kg_per_credit, 1000.0);
        assert_eq!(p.price_min_per_credit, 50.0);
        assert_eq!(p.price_max_per_credit, 150.0);
        assert!(p.validate().is_ok());
    }

    #[test]
    fn zero_kg_per_credit_rejected() {
        assert!(CarbonCreditPolicy::new(0.0, 50.0, 150.0).is_err());
    }

    #[test]
    fn inverted_price_band_rejected() {
        assert!(CarbonCreditPolicy::new(1000.0, 150.0, 50.0).is_err());
    }

    #[test]
    fn flat_price_band_allowed() {
        assert!(CarbonCreditPolicy::new(1000.0, 80.0, 80.0).is_ok());
    }
}

#[cfg(test)]
mod config {
    use crate::{EstimatorConfig, EtError};

    #[test]
    fn default_is_valid() {
        assert!(EstimatorConfig::default().validate().is_ok());
    }

    #[test]
    fn edited_in_place_is_caught() {
        let mut cfg = EstimatorConfig::default();
        cfg.credit_policy.kg_per_credit = -1.0;
        assert!(matches!(cfg.validate(), Err(EtError::Config(_))));
    }
}

#[cfg(test)]
mod round {
    use crate::round_to;

    #[test]
    fn half_away_from_zero() {
        assert_eq!(round_to(2.5, 0), 3.0);
        assert_eq!(round_to(-2.5, 0), -3.0);
        assert_eq!(round_to(0.125, 2), 0.13);
    }

    #[test]
    fn fixed_decimals() {
        assert_eq!(round_to(51.599999999999994, 2), 51.6);
        assert_eq!(round_to(25.833333, 1), 25.8);
        assert_eq!(round_to(0.05160000001, 4), 0.0516);
    }

    #[test]
    fn negative_zero_folded() {
        let r = round_to(-0.0001, 2);
        assert_eq!(r, 0.0);
        assert!(r.is_sign_positive());
    }

    #[test]
    fn non_finite_passthrough() {
        assert!(round_to(f64::NAN, 2).is_nan());
        assert_eq!(round_to(f64::INFINITY, 2), f64::INFINITY);
    }
}
