use sample_quality::quality::{metric_definitions, Classification, Direction, Domain};

#[test]
fn zones_partition_every_valid_range() {
    for domain in Domain::ordered() {
        for definition in metric_definitions(domain) {
            assert!(
                definition.zones_partition_range(),
                "{domain}.{} zones do not tile its range",
                definition.key
            );
        }
    }
}

#[test]
fn every_zone_boundary_resolves_to_a_containing_zone() {
    for domain in Domain::ordered() {
        for definition in metric_definitions(domain) {
            for (index, zone) in definition.zones.iter().enumerate() {
                for boundary in [zone.min, zone.max] {
                    let resolved = definition.resolve_zone(boundary).unwrap_or_else(|| {
                        panic!("{domain}.{} boundary {boundary} (zone {index}) unresolved", definition.key)
                    });
                    assert!(resolved.contains(boundary));

                    let touches_good = definition.zones.iter().any(|candidate| {
                        candidate.contains(boundary) && candidate.classification == Classification::Good
                    });
                    let on_point = definition
                        .zones
                        .iter()
                        .any(|candidate| candidate.is_point() && candidate.min == boundary);
                    if touches_good && !on_point {
                        assert_eq!(
                            resolved.classification,
                            Classification::Good,
                            "{domain}.{} boundary {boundary}",
                            definition.key
                        );
                    }
                }
            }
        }
    }
}

#[test]
fn boundaries_next_to_a_good_zone_stay_good() {
    let milk_ph = metric_definitions(Domain::Milk)
        .iter()
        .find(|definition| definition.key == "pH")
        .expect("pH defined");

    assert_eq!(milk_ph.classify(6.5).classification, Classification::Good);
    assert_eq!(milk_ph.classify(7.0).classification, Classification::Good);
    assert_eq!(milk_ph.classify(7.01).classification, Classification::Warning);
    assert_eq!(milk_ph.classify(9.5).classification, Classification::Warning);
    assert!(!milk_ph.classify(9.5).out_of_range);
}

#[test]
fn boundaries_between_bad_zones_go_to_the_lower_zone() {
    let volatile = metric_definitions(Domain::Wine)
        .iter()
        .find(|definition| definition.key == "volatile_acidity")
        .expect("volatile acidity defined");

    assert_eq!(volatile.classify(0.5).classification, Classification::Good);
    assert_eq!(volatile.classify(0.7).classification, Classification::Warning);
    assert_eq!(volatile.classify(0.71).classification, Classification::Poor);
}

#[test]
fn keys_are_unique_within_a_domain() {
    for domain in Domain::ordered() {
        let definitions = metric_definitions(domain);
        for (index, definition) in definitions.iter().enumerate() {
            assert!(
                definitions[index + 1..]
                    .iter()
                    .all(|other| other.key != definition.key),
                "{domain}.{} declared twice",
                definition.key
            );
        }
    }
}

#[test]
fn binary_metrics_span_zero_to_one() {
    for domain in Domain::ordered() {
        for definition in metric_definitions(domain)
            .iter()
            .filter(|definition| definition.direction.is_binary())
        {
            assert_eq!(definition.valid_range.min, 0.0);
            assert_eq!(definition.valid_range.max, 1.0);
            let good_value = match definition.direction {
                Direction::BinaryGoodIsOne => 1.0,
                _ => 0.0,
            };
            assert_eq!(
                definition.classify(good_value).classification,
                Classification::Good
            );
        }
    }
}

#[test]
fn severity_thresholds_are_positive() {
    for domain in Domain::ordered() {
        for definition in metric_definitions(domain) {
            assert!(
                definition.severity_threshold() > 0.0,
                "{domain}.{}",
                definition.key
            );
        }
    }
}
