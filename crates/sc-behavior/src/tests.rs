//! Unit tests for sc-behavior.

#[cfg(test)]
use sc_core::{ModelConfig, PolicyInput};

#[cfg(test)]
fn model_with_rates(peak: f64, off_peak: f64) -> ModelConfig {
    let mut m = ModelConfig::default();
    m.model_scale = 1.0;
    m.peak_trip_rate = peak;
    m.off_peak_trip_rate = off_peak;
    m
}

#[cfg(test)]
fn policy(p_always: f64, p_if_path: f64) -> PolicyInput {
    PolicyInput { p_always_bike: p_always, p_bike_if_path: p_if_path, ..PolicyInput::default() }
}

// ── Generators ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod generator_tests {
    use sc_agent::ModePreference;
    use sc_core::{ModelConfig, Settlement, SimRng};

    use super::{model_with_rates, policy};
    use crate::Generators;

    #[test]
    fn mode_preference_extremes() {
        let m = ModelConfig::default();
        let mut rng = SimRng::new(1);

        let always = Generators::new(&m, &policy(1.0, 0.0)).unwrap();
        assert_eq!(always.sample_mode_preference(&mut rng), ModePreference::AlwaysBikes);

        let if_path = Generators::new(&m, &policy(0.0, 1.0)).unwrap();
        assert_eq!(if_path.sample_mode_preference(&mut rng), ModePreference::BikesIfPathAvailable);

        let never = Generators::new(&m, &policy(0.0, 0.0)).unwrap();
        assert_eq!(never.sample_mode_preference(&mut rng), ModePreference::NeverBikes);
    }

    #[test]
    fn always_bikes_takes_precedence() {
        let g = Generators::new(&ModelConfig::default(), &policy(1.0, 1.0)).unwrap();
        let mut rng = SimRng::new(2);
        for _ in 0..100 {
            assert_eq!(g.sample_mode_preference(&mut rng), ModePreference::AlwaysBikes);
        }
    }

    #[test]
    fn initiation_follows_season() {
        let g = Generators::new(&model_with_rates(1.0, 0.0), &policy(0.0, 0.0)).unwrap();
        let mut rng = SimRng::new(3);
        for _ in 0..100 {
            assert!(g.sample_trip_initiation(&mut rng, true));
            assert!(!g.sample_trip_initiation(&mut rng, false));
        }
    }

    #[test]
    fn trip_duration_mean_is_near_3_3() {
        let g = Generators::new(&ModelConfig::default(), &policy(0.0, 0.0)).unwrap();
        let mut rng = SimRng::new(4);
        let n = 20_000;
        let total: u64 = (0..n).map(|_| g.sample_trip_duration(&mut rng) as u64).sum();
        let mean = total as f64 / n as f64;
        assert!((mean - 3.3).abs() < 0.1, "mean {mean}");
    }

    #[test]
    fn destination_weights_follow_population() {
        let g = Generators::new(&ModelConfig::default(), &policy(0.0, 0.0)).unwrap();
        let mut rng = SimRng::new(5);
        let n = 18_000;
        let mut counts = [0usize; 3];
        for _ in 0..n {
            match g.sample_destination(&mut rng) {
                Settlement::Gibsons      => counts[0] += 1,
                Settlement::RobertsCreek => counts[1] += 1,
                Settlement::Sechelt      => counts[2] += 1,
                Settlement::Vancouver    => panic!("Vancouver is never a destination draw"),
            }
        }
        // Expected 5000 / 3000 / 10000 of 18000.
        assert!((counts[0] as f64 - 5000.0).abs() < 400.0, "{counts:?}");
        assert!((counts[1] as f64 - 3000.0).abs() < 400.0, "{counts:?}");
        assert!((counts[2] as f64 - 10000.0).abs() < 400.0, "{counts:?}");
    }

    #[test]
    fn zero_population_destination_never_drawn() {
        let mut m = ModelConfig::default();
        m.populations.gibsons = 0.0;
        m.populations.roberts_creek = 0.0;
        let g = Generators::new(&m, &policy(0.0, 0.0)).unwrap();
        let mut rng = SimRng::new(6);
        for _ in 0..200 {
            assert_eq!(g.sample_destination(&mut rng), Settlement::Sechelt);
        }
    }

    #[test]
    fn balk_point_in_range() {
        let g = Generators::new(&ModelConfig::default(), &policy(0.0, 0.0)).unwrap();
        let mut rng = SimRng::new(7);
        for _ in 0..1000 {
            let b = g.sample_balk_point(&mut rng);
            assert!((4.0..=12.0).contains(&b), "{b}");
        }
    }

    #[test]
    fn rejects_bad_probability() {
        assert!(Generators::new(&ModelConfig::default(), &policy(2.0, 0.0)).is_err());
        assert!(Generators::new(&model_with_rates(1.5, 0.0), &policy(0.0, 0.0)).is_err());
    }
}

// ── Initializer + destinations ────────────────────────────────────────────────

#[cfg(test)]
mod assignment_tests {
    use sc_agent::{ModePreference, PopulationBuilder};
    use sc_core::{ModelConfig, Settlement, SimRng};

    use super::policy;
    use crate::{Destinations, Generators, initialize_population};

    #[test]
    fn initializer_fills_preferences_and_balk_points() {
        let mut pop = PopulationBuilder::new().residents(Settlement::Vancouver, 50).build();
        let g = Generators::new(&ModelConfig::default(), &policy(0.0, 1.0)).unwrap();
        initialize_population(&mut pop, &g, &mut SimRng::new(1));
        assert_eq!(pop.count_preference(ModePreference::BikesIfPathAvailable), 50);
        assert!(pop.balk_point.iter().all(|b| (4.0..=12.0).contains(b)));
    }

    #[test]
    fn vancouver_goes_to_coast_and_coast_goes_to_vancouver() {
        let pop = PopulationBuilder::new()
            .residents(Settlement::Vancouver, 200)
            .residents(Settlement::Gibsons, 5)
            .residents(Settlement::Sechelt, 5)
            .build();
        let g = Generators::new(&ModelConfig::default(), &policy(0.0, 0.0)).unwrap();
        let dest = Destinations::assign(&pop, &g, &mut SimRng::new(2));

        assert_eq!(dest.len(), pop.count);
        for agent in pop.agent_ids() {
            let d = dest.of(agent);
            match pop.home_of(agent) {
                Settlement::Vancouver => assert!(d.is_coast()),
                _                     => assert_eq!(d, Settlement::Vancouver),
            }
        }
        assert_eq!(dest.count_to(Settlement::Vancouver), 10);
    }

    #[test]
    fn assignment_is_deterministic_per_seed() {
        let pop = PopulationBuilder::new().residents(Settlement::Vancouver, 100).build();
        let g = Generators::new(&ModelConfig::default(), &policy(0.0, 0.0)).unwrap();
        let a = Destinations::assign(&pop, &g, &mut SimRng::stream(9, 1));
        let b = Destinations::assign(&pop, &g, &mut SimRng::stream(9, 1));
        assert_eq!(a, b);
    }
}

// ── Trip decisions ────────────────────────────────────────────────────────────

#[cfg(test)]
mod decision_tests {
    use sc_agent::{Population, PopulationBuilder, RunState};
    use sc_core::{Settlement, SimRng};

    use super::{model_with_rates, policy};
    use crate::{BehaviorError, Generators, TripDecision, advance_day};

    fn vancouver(n: usize) -> Population {
        PopulationBuilder::new().residents(Settlement::Vancouver, n).build()
    }

    fn never_travel() -> Generators {
        Generators::new(&model_with_rates(0.0, 0.0), &policy(0.0, 0.0)).unwrap()
    }

    #[test]
    fn zero_rate_everyone_stays() {
        let pop = vancouver(20);
        let mut state = RunState::new(&pop);
        let mut out = Vec::new();
        advance_day(&pop, &mut state, &never_travel(), &mut SimRng::new(1), true, &mut out).unwrap();
        assert_eq!(out.len(), 20);
        assert!(out.iter().all(|&d| d == TripDecision::Stay));
    }

    #[test]
    fn certain_initiation_departs_with_positive_nights() {
        let pop = vancouver(500);
        let mut state = RunState::new(&pop);
        let g = Generators::new(&model_with_rates(1.0, 1.0), &policy(0.0, 0.0)).unwrap();
        let mut out = Vec::new();
        advance_day(&pop, &mut state, &g, &mut SimRng::new(2), false, &mut out).unwrap();

        let mut departures = 0;
        for (i, d) in out.iter().enumerate() {
            match d {
                TripDecision::Depart => {
                    assert!(state.trip_nights[i] > 0);
                    departures += 1;
                }
                // Zero-night Poisson draws.
                TripDecision::Stay => assert_eq!(state.trip_nights[i], 0),
                other => panic!("unexpected {other:?}"),
            }
        }
        assert!(departures > 450, "{departures}");
    }

    #[test]
    fn queued_agents_are_left_alone() {
        let pop = vancouver(2);
        let mut state = RunState::new(&pop);
        state.queued[0] = true;
        state.trip_nights[0] = 4;
        let mut out = Vec::new();
        advance_day(&pop, &mut state, &never_travel(), &mut SimRng::new(3), true, &mut out).unwrap();
        assert_eq!(out, [TripDecision::Queued, TripDecision::Stay]);
        assert_eq!(state.trip_nights[0], 4);
    }

    #[test]
    fn pending_trip_retries_without_rerolling() {
        let pop = vancouver(1);
        let mut state = RunState::new(&pop);
        state.trip_nights[0] = 3; // balked yesterday
        let mut out = Vec::new();
        advance_day(&pop, &mut state, &never_travel(), &mut SimRng::new(4), true, &mut out).unwrap();
        assert_eq!(out, [TripDecision::Depart]);
        assert_eq!(state.trip_nights[0], 3);
    }

    #[test]
    fn away_counts_down_then_returns() {
        let pop = vancouver(1);
        let mut state = RunState::new(&pop);
        state.location[0] = Settlement::Sechelt;
        state.trip_nights[0] = 3;
        let g = never_travel();
        let mut rng = SimRng::new(5);
        let mut out = Vec::new();

        let mut seen = Vec::new();
        for _ in 0..3 {
            advance_day(&pop, &mut state, &g, &mut rng, false, &mut out).unwrap();
            seen.push(out[0]);
        }
        assert_eq!(seen, [TripDecision::Continue, TripDecision::Continue, TripDecision::Return]);
        assert_eq!(state.trip_nights[0], 0);

        // Still away after balking: return again.
        advance_day(&pop, &mut state, &g, &mut rng, false, &mut out).unwrap();
        assert_eq!(out[0], TripDecision::Return);
    }

    #[test]
    fn length_mismatch_fails_fast() {
        let pop = vancouver(3);
        let mut state = RunState::new(&vancouver(2));
        let mut out = Vec::new();
        let err = advance_day(&pop, &mut state, &never_travel(), &mut SimRng::new(6), true, &mut out)
            .unwrap_err();
        assert!(matches!(err, BehaviorError::AgentCountMismatch { expected: 3, got: 2, .. }));
        assert!(out.is_empty());
    }
}

// ── Classifier ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod classifier_tests {
    use sc_agent::ModePreference;
    use sc_core::{AgentId, Corridor, FerryDirection, Mode, QueueKey, Settlement};

    use crate::{BehaviorError, Leg, Traveller, classify};

    fn traveller(
        home:        Settlement,
        destination: Settlement,
        leg:         Leg,
        preference:  ModePreference,
    ) -> Traveller {
        let location = match leg {
            Leg::Departure => home,
            Leg::Homeward  => destination,
        };
        Traveller { agent: AgentId(0), home, location, destination, preference }
    }

    /// Every (home, destination) pair the destination assignment can produce.
    fn valid_trips() -> Vec<(Settlement, Settlement)> {
        let mut trips = Vec::new();
        for d in Settlement::COAST {
            trips.push((Settlement::Vancouver, d));
            trips.push((d, Settlement::Vancouver));
        }
        trips
    }

    #[test]
    fn table_is_total_over_valid_states() {
        let mut checked = 0;
        for (home, dest) in valid_trips() {
            for leg in [Leg::Departure, Leg::Homeward] {
                for pref in ModePreference::ALL {
                    for corridor in Corridor::ALL {
                        let t = traveller(home, dest, leg, pref);
                        assert!(classify(&t, leg, corridor).is_ok(), "{t:?} {leg:?} {corridor}");
                        checked += 1;
                    }
                }
            }
        }
        assert_eq!(checked, 6 * 2 * 3 * 3);
    }

    #[test]
    fn direction_follows_location() {
        let t = traveller(Settlement::Vancouver, Settlement::Gibsons, Leg::Departure, ModePreference::NeverBikes);
        assert_eq!(classify(&t, Leg::Departure, Corridor::None).unwrap(), QueueKey::CarOutbound);

        let t = traveller(Settlement::Vancouver, Settlement::Gibsons, Leg::Homeward, ModePreference::NeverBikes);
        assert_eq!(classify(&t, Leg::Homeward, Corridor::None).unwrap(), QueueKey::CarReturn);

        let t = traveller(Settlement::Sechelt, Settlement::Vancouver, Leg::Departure, ModePreference::NeverBikes);
        assert_eq!(classify(&t, Leg::Departure, Corridor::None).unwrap().direction(), FerryDirection::Return);

        let t = traveller(Settlement::Sechelt, Settlement::Vancouver, Leg::Homeward, ModePreference::NeverBikes);
        assert_eq!(classify(&t, Leg::Homeward, Corridor::None).unwrap().direction(), FerryDirection::Outbound);
    }

    #[test]
    fn fixed_preferences_ignore_corridor() {
        for (home, dest) in valid_trips() {
            for corridor in Corridor::ALL {
                let t = traveller(home, dest, Leg::Departure, ModePreference::AlwaysBikes);
                assert_eq!(classify(&t, Leg::Departure, corridor).unwrap().mode(), Mode::Bike);
                let t = traveller(home, dest, Leg::Departure, ModePreference::NeverBikes);
                assert_eq!(classify(&t, Leg::Departure, corridor).unwrap().mode(), Mode::Car);
            }
        }
    }

    #[test]
    fn path_willing_cyclist_needs_coverage_of_coast_end() {
        let p = ModePreference::BikesIfPathAvailable;
        let mode = |home, dest, leg, corridor| {
            classify(&traveller(home, dest, leg, p), leg, corridor).unwrap().mode()
        };
        use Settlement::*;

        for leg in [Leg::Departure, Leg::Homeward] {
            // No corridor: nobody path-willing bikes.
            for (home, dest) in valid_trips() {
                assert_eq!(mode(home, dest, leg, Corridor::None), Mode::Car);
            }
            // Visitor to Sechelt only bikes with the full corridor.
            assert_eq!(mode(Vancouver, Sechelt, leg, Corridor::ToRobertsCreek), Mode::Car);
            assert_eq!(mode(Vancouver, Sechelt, leg, Corridor::ToSechelt), Mode::Bike);
            // Roberts Creek is covered by either corridor.
            assert_eq!(mode(Vancouver, RobertsCreek, leg, Corridor::ToRobertsCreek), Mode::Bike);
            assert_eq!(mode(RobertsCreek, Vancouver, leg, Corridor::ToSechelt), Mode::Bike);
            // Gibsons residents bike with any corridor.
            assert_eq!(mode(Gibsons, Vancouver, leg, Corridor::ToRobertsCreek), Mode::Bike);
            // Sechelt residents need the full corridor.
            assert_eq!(mode(Sechelt, Vancouver, leg, Corridor::ToRobertsCreek), Mode::Car);
            assert_eq!(mode(Sechelt, Vancouver, leg, Corridor::ToSechelt), Mode::Bike);
        }
    }

    #[test]
    fn inconsistent_state_is_reported_not_dropped() {
        // Vancouver resident with a Vancouver destination never crosses.
        let t = Traveller {
            agent:       AgentId(9),
            home:        Settlement::Vancouver,
            location:    Settlement::Vancouver,
            destination: Settlement::Vancouver,
            preference:  ModePreference::NeverBikes,
        };
        let err = classify(&t, Leg::Departure, Corridor::None).unwrap_err();
        match err {
            BehaviorError::Unclassified { agent, home, destination, .. } => {
                assert_eq!(agent, AgentId(9));
                assert_eq!(home, Settlement::Vancouver);
                assert_eq!(destination, Settlement::Vancouver);
            }
            other => panic!("unexpected {other:?}"),
        }

        // Homeward leg for an agent who is already home.
        let t = traveller(Settlement::Gibsons, Settlement::Vancouver, Leg::Departure, ModePreference::NeverBikes);
        assert!(classify(&t, Leg::Homeward, Corridor::None).is_err());
    }

    #[test]
    fn diagnostic_names_the_tuple() {
        let t = Traveller {
            agent:       AgentId(3),
            home:        Settlement::Sechelt,
            location:    Settlement::Gibsons,
            destination: Settlement::Vancouver,
            preference:  ModePreference::AlwaysBikes,
        };
        let msg = classify(&t, Leg::Homeward, Corridor::ToSechelt).unwrap_err().to_string();
        assert!(msg.contains("AgentId(3)"), "{msg}");
        assert!(msg.contains("location=gibsons"), "{msg}");
        assert!(msg.contains("corridor=to_sechelt"), "{msg}");
    }
}
