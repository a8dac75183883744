//! Unit tests for sc-core primitives.

#[cfg(test)]
mod ids {
    use crate::{AgentId, IterationId};

    #[test]
    fn index_roundtrip() {
        let id = AgentId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(AgentId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "AgentId(7)");
        assert_eq!(IterationId(2).to_string(), "IterationId(2)");
    }
}

#[cfg(test)]
mod settlement {
    use crate::{Corridor, Settlement};

    #[test]
    fn coast_membership() {
        assert!(!Settlement::Vancouver.is_coast());
        assert!(Settlement::COAST.iter().all(|s| s.is_coast()));
        assert_eq!(Settlement::Vancouver.coast_position(), None);
        assert_eq!(Settlement::Sechelt.coast_position(), Some(3));
    }

    #[test]
    fn no_corridor_covers_nothing() {
        for s in Settlement::ALL {
            assert!(!Corridor::None.covers(s), "{s}");
        }
    }

    #[test]
    fn roberts_creek_corridor_stops_short_of_sechelt() {
        let c = Corridor::ToRobertsCreek;
        assert!(c.covers(Settlement::Gibsons));
        assert!(c.covers(Settlement::RobertsCreek));
        assert!(!c.covers(Settlement::Sechelt));
        assert!(!c.covers(Settlement::Vancouver));
    }

    #[test]
    fn sechelt_corridor_covers_whole_coast() {
        for s in Settlement::COAST {
            assert!(Corridor::ToSechelt.covers(s), "{s}");
        }
        assert!(!Corridor::ToSechelt.covers(Settlement::Vancouver));
    }

    #[test]
    fn corridor_parses_prompt_codes_and_names() {
        assert_eq!("n".parse::<Corridor>().unwrap(), Corridor::None);
        assert_eq!("r".parse::<Corridor>().unwrap(), Corridor::ToRobertsCreek);
        assert_eq!("s".parse::<Corridor>().unwrap(), Corridor::ToSechelt);
        assert_eq!("to_sechelt".parse::<Corridor>().unwrap(), Corridor::ToSechelt);
        // Codes are case-sensitive.
        assert!("S".parse::<Corridor>().is_err());
        assert!("x".parse::<Corridor>().is_err());
    }

    #[test]
    fn corridor_code_roundtrip() {
        for c in Corridor::ALL {
            assert_eq!(Corridor::from_code(c.code()), Some(c));
        }
    }
}

#[cfg(test)]
mod calendar {
    use crate::{Calendar, Day};

    #[test]
    fn peak_window_is_inclusive() {
        let cal = Calendar::default();
        assert!(!cal.is_peak(Day(150)));
        assert!(cal.is_peak(Day(151)));
        assert!(cal.is_peak(Day(243)));
        assert!(!cal.is_peak(Day(244)));
    }

    #[test]
    fn peak_is_93_days() {
        let cal = Calendar::default();
        assert_eq!(cal.peak_len(), 93);
        assert_eq!(cal.days().filter(|&d| cal.is_peak(d)).count(), 93);
    }

    #[test]
    fn year_has_365_days() {
        let cal = Calendar::default();
        let days: Vec<Day> = cal.days().collect();
        assert_eq!(days.len(), 365);
        assert_eq!(days[0], Day::ZERO);
        assert_eq!(days[364], Day(364));
    }
}

#[cfg(test)]
mod config {
    use crate::{
        BIKES_PER_FERRY, CARS_PER_FERRY, ModelConfig, PolicyInput, Settlement, SimConfig,
    };

    #[test]
    fn reference_capacities() {
        assert_eq!(CARS_PER_FERRY, 115);
        assert_eq!(BIKES_PER_FERRY, 370);
    }

    #[test]
    fn scaled_trip_rates() {
        let m = ModelConfig::default();
        assert!((m.agent_trip_rate(true) - 0.00675).abs() < 1e-12);
        assert!((m.agent_trip_rate(false) - 0.001134).abs() < 1e-12);
    }

    #[test]
    fn agent_counts_are_scaled() {
        let m = ModelConfig::default();
        assert_eq!(m.populations.agent_count(Settlement::Gibsons, m.model_scale), 1852);
        assert_eq!(m.populations.agent_count(Settlement::Sechelt, m.model_scale), 3704);
        assert!(m.agent_count() > 900_000);
    }

    #[test]
    fn default_config_is_valid() {
        let cfg = SimConfig::new(PolicyInput::default(), 1);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn rejects_out_of_range_probabilities() {
        let mut p = PolicyInput::default();
        p.p_bike_if_path = 1.5;
        assert!(p.validate().is_err());
        p.p_bike_if_path = 0.5;
        p.p_always_bike = -0.1;
        assert!(p.validate().is_err());
        p.p_always_bike = f64::NAN;
        assert!(p.validate().is_err());
    }

    #[test]
    fn rejects_out_of_range_iterations() {
        let mut p = PolicyInput::default();
        p.iterations = 0;
        assert!(p.validate().is_err());
        p.iterations = 101;
        assert!(p.validate().is_err());
        p.iterations = 100;
        assert!(p.validate().is_ok());
    }

    #[test]
    fn rejects_inverted_balk_range() {
        let mut m = ModelConfig::default();
        m.balk_min_sailings = 10.0;
        m.balk_max_sailings = 2.0;
        assert!(m.validate().is_err());
    }

    #[test]
    fn rejects_zero_sailings() {
        let mut m = ModelConfig::default();
        m.ferries_per_day = 0;
        assert!(m.validate().is_err());
    }
}

#[cfg(test)]
mod rng {
    use rand::distributions::Standard;

    use crate::SimRng;

    #[test]
    fn deterministic_same_stream() {
        let mut r1 = SimRng::stream(12345, 3);
        let mut r2 = SimRng::stream(12345, 3);
        for _ in 0..100 {
            let a: u64 = r1.sample(&Standard);
            let b: u64 = r2.sample(&Standard);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn different_streams_differ() {
        let mut r0 = SimRng::stream(1, 0);
        let mut r1 = SimRng::stream(1, 1);
        let a: u64 = r0.sample(&Standard);
        let b: u64 = r1.sample(&Standard);
        assert_ne!(a, b, "adjacent streams should diverge");
    }

    #[test]
    fn sample_from_distribution() {
        use rand::distributions::Bernoulli;

        let mut rng = SimRng::new(0);
        let never = Bernoulli::new(0.0).unwrap();
        let always = Bernoulli::new(1.0).unwrap();
        assert!((0..50).all(|_| !rng.sample(&never)));
        assert!((0..50).all(|_| rng.sample(&always)));
    }

    #[test]
    fn stream_zero_differs_from_master() {
        let mut a = SimRng::new(7);
        let mut b = SimRng::stream(7, 0);
        let (x, y): (u64, u64) = (a.sample(&Standard), b.sample(&Standard));
        assert_ne!(x, y);
    }
}

#[cfg(test)]
mod ferry {
    use crate::{FerryDirection, Mode, QueueKey};

    #[test]
    fn key_roundtrips_through_mode_and_direction() {
        for key in QueueKey::ALL {
            assert_eq!(QueueKey::new(key.mode(), key.direction()), key);
        }
    }

    #[test]
    fn indices_are_dense() {
        for (i, key) in QueueKey::ALL.iter().enumerate() {
            assert_eq!(key.index(), i);
        }
        assert_eq!(QueueKey::new(Mode::Bike, FerryDirection::Return), QueueKey::BikeReturn);
    }
}
