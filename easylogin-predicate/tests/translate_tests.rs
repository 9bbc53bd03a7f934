use easylogin_predicate::{
    CompoundOperator, NATIVE_WILDCARD_ATTRIBUTE, NativeCollation, NativeJunction, NativeOperator,
    NativePredicate, PredicateTranslator, StandardEqualityRule, StandardMatchType,
    StandardPredicate, UnsupportedPredicateError, describe_predicate, native_leaf_for,
};
use easylogin_schema::{SchemaMappingTable, attrs, builtin_table};
use easylogin_types::DirectoryValue;
use pretty_assertions::assert_eq;

fn uid_table() -> SchemaMappingTable {
    SchemaMappingTable::builder(1)
        .native_type("user", "Users", |t| {
            t.list("RecordName", &["uid"]).scalar("UniqueID", "uidNumber")
        })
        .build()
        .unwrap()
}

fn record_name_is(name: &str) -> StandardPredicate {
    StandardPredicate::leaf(
        attrs::RECORD_NAME,
        StandardMatchType::EqualTo,
        StandardEqualityRule::CaseIgnore,
        name,
    )
}

// ── Leaves ───────────────────────────────────────────────────────

#[test]
fn case_insensitive_equals_on_record_name() {
    let table = uid_table();
    let translator = PredicateTranslator::new(&table, "user").unwrap();
    let native = translator.to_native(record_name_is("jdoe")).unwrap();
    assert_eq!(
        native,
        NativePredicate::Match {
            attribute: "uid".into(),
            operator: NativeOperator::Equals,
            collation: NativeCollation::CaseFold,
            operands: vec![DirectoryValue::from("jdoe")],
        }
    );
}

#[test]
fn equality_rule_without_native_counterpart_is_rejected() {
    let table = uid_table();
    let translator = PredicateTranslator::new(&table, "user").unwrap();
    let predicate = StandardPredicate::leaf(
        attrs::RECORD_NAME,
        StandardMatchType::EqualTo,
        StandardEqualityRule::DiacriticIgnore,
        "jdoe",
    );
    let err = translator.to_native(predicate).unwrap_err();
    assert_eq!(
        err,
        UnsupportedPredicateError::MatchRule {
            match_type: StandardMatchType::EqualTo,
            equality_rule: StandardEqualityRule::DiacriticIgnore,
        }
    );
    assert!(err.to_string().contains("diacriticIgnore"));
}

#[test]
fn numeric_substring_match_is_rejected() {
    let table = builtin_table().unwrap();
    let translator = PredicateTranslator::new(&table, "user").unwrap();
    let predicate = StandardPredicate::leaf(
        attrs::UNIQUE_ID,
        StandardMatchType::BeginsWith,
        StandardEqualityRule::Numeric,
        "50",
    );
    assert!(matches!(
        translator.to_native(predicate),
        Err(UnsupportedPredicateError::MatchRule { .. })
    ));
}

#[test]
fn unmapped_attribute_is_rejected() {
    let table = builtin_table().unwrap();
    let translator = PredicateTranslator::new(&table, "device").unwrap();
    let predicate = StandardPredicate::leaf(
        attrs::USER_SHELL,
        StandardMatchType::EqualTo,
        StandardEqualityRule::CaseExact,
        "/bin/zsh",
    );
    assert_eq!(
        translator.to_native(predicate).unwrap_err(),
        UnsupportedPredicateError::UnmappedAttribute {
            native_type: "device".into(),
            attribute: attrs::USER_SHELL.into(),
        }
    );
}

#[test]
fn unknown_native_type_is_rejected() {
    let table = builtin_table().unwrap();
    assert_eq!(
        PredicateTranslator::new(&table, "printer").unwrap_err(),
        UnsupportedPredicateError::UnknownNativeType("printer".into())
    );
}

#[test]
fn leaf_without_operand_is_rejected() {
    let table = builtin_table().unwrap();
    let translator = PredicateTranslator::new(&table, "user").unwrap();
    let predicate = StandardPredicate::Match {
        attribute: attrs::RECORD_NAME.into(),
        match_type: StandardMatchType::Contains,
        equality_rule: StandardEqualityRule::CaseIgnore,
        operands: vec![],
    };
    assert!(matches!(
        translator.to_native(predicate),
        Err(UnsupportedPredicateError::MissingOperand { .. })
    ));
}

#[test]
fn any_match_needs_no_operand() {
    let table = builtin_table().unwrap();
    let translator = PredicateTranslator::new(&table, "user").unwrap();
    let native = translator.to_native(StandardPredicate::any(attrs::RECORD_NAME)).unwrap();
    assert_eq!(
        native,
        NativePredicate::Match {
            attribute: "shortname".into(),
            operator: NativeOperator::All,
            collation: NativeCollation::Exact,
            operands: vec![],
        }
    );
}

#[test]
fn leaf_uses_highest_precedence_native_attribute() {
    let table = builtin_table().unwrap();
    let translator = PredicateTranslator::new(&table, "device").unwrap();
    let native = translator
        .to_native(StandardPredicate::leaf(
            attrs::RECORD_NAME,
            StandardMatchType::BeginsWith,
            StandardEqualityRule::CaseExact,
            "kiosk",
        ))
        .unwrap();
    let NativePredicate::Match { attribute, .. } = native else {
        panic!("expected a leaf");
    };
    assert_eq!(attribute, "deviceName");
}

#[test]
fn scalar_operands_are_shape_normalized() {
    let table = builtin_table().unwrap();
    let translator = PredicateTranslator::new(&table, "user").unwrap();
    let predicate = StandardPredicate::Match {
        attribute: attrs::UNIQUE_ID.into(),
        match_type: StandardMatchType::GreaterThan,
        equality_rule: StandardEqualityRule::Numeric,
        operands: vec![DirectoryValue::list(["500"])],
    };
    let NativePredicate::Match { operands, .. } = translator.to_native(predicate).unwrap() else {
        panic!("expected a leaf");
    };
    assert_eq!(operands, vec![DirectoryValue::from("500")]);
}

#[test]
fn free_text_operands_pass_through() {
    let table = builtin_table().unwrap();
    let translator = PredicateTranslator::new(&table, "user").unwrap();
    let operand = DirectoryValue::list(["john", "doe"]);
    let predicate = StandardPredicate::leaf(
        attrs::ALL_ATTRIBUTES,
        StandardMatchType::Contains,
        StandardEqualityRule::CaseIgnore,
        operand.clone(),
    );
    let native = translator.to_native(predicate).unwrap();
    assert_eq!(
        native,
        NativePredicate::Match {
            attribute: NATIVE_WILDCARD_ATTRIBUTE.into(),
            operator: NativeOperator::Contains,
            collation: NativeCollation::CaseFold,
            operands: vec![operand],
        }
    );
}

// ── Compounds ────────────────────────────────────────────────────

#[test]
fn compound_preserves_order() {
    let table = builtin_table().unwrap();
    let translator = PredicateTranslator::new(&table, "user").unwrap();

    let a = record_name_is("jdoe");
    let b = StandardPredicate::leaf(
        attrs::UNIQUE_ID,
        StandardMatchType::LessThan,
        StandardEqualityRule::Numeric,
        "1000",
    );

    let forward = translator.to_native(StandardPredicate::and(vec![a.clone(), b.clone()])).unwrap();
    let again = translator.to_native(StandardPredicate::and(vec![a.clone(), b.clone()])).unwrap();
    let reversed = translator.to_native(StandardPredicate::and(vec![b, a])).unwrap();

    assert_eq!(forward, again);
    assert_ne!(forward, reversed);

    let NativePredicate::Junction { junction, subpredicates } = forward else {
        panic!("expected a junction");
    };
    assert_eq!(junction, NativeJunction::AllOf);
    assert!(matches!(&subpredicates[0], NativePredicate::Match { attribute, .. } if attribute == "shortname"));
    assert!(matches!(&subpredicates[1], NativePredicate::Match { attribute, .. } if attribute == "uid"));
}

#[test]
fn nested_compound_translates_recursively() {
    let table = builtin_table().unwrap();
    let translator = PredicateTranslator::new(&table, "user").unwrap();
    let predicate = StandardPredicate::or(vec![
        record_name_is("jdoe"),
        StandardPredicate::not(record_name_is("root")),
    ]);
    let native = translator.to_native(predicate).unwrap();
    assert_eq!(
        describe_predicate(&native),
        "(any_of (shortname equals case_fold \"jdoe\") (none_of (shortname equals case_fold \"root\")))"
    );
}

#[test]
fn attribute_names_are_escaped_in_diagnostics() {
    let native = NativePredicate::Match {
        attribute: "uid\nX".into(),
        operator: NativeOperator::Equals,
        collation: NativeCollation::Exact,
        operands: vec![DirectoryValue::from("jdoe")],
    };
    let text = describe_predicate(&native);
    assert!(!text.contains('\n'));
    assert_eq!(text, r#"(uid\nX equals exact "jdoe")"#);

    let standard = StandardPredicate::and(vec![StandardPredicate::any("Record\rName")]);
    assert_eq!(describe_predicate(&standard), r#"(and (Record\rName any none))"#);
}

#[test]
fn unsupported_leaf_inside_compound_rejects_whole_tree() {
    let table = builtin_table().unwrap();
    let translator = PredicateTranslator::new(&table, "user").unwrap();
    let predicate = StandardPredicate::and(vec![
        record_name_is("jdoe"),
        StandardPredicate::leaf(
            attrs::CREATION_TIMESTAMP,
            StandardMatchType::GreaterThan,
            StandardEqualityRule::Time,
            "2017-01-01T00:00:00Z",
        ),
    ]);
    assert!(translator.to_native(predicate).is_err());
}

#[test]
fn not_requires_exactly_one_child() {
    let table = builtin_table().unwrap();
    let translator = PredicateTranslator::new(&table, "user").unwrap();
    let predicate = StandardPredicate::Compound {
        operator: CompoundOperator::Not,
        subpredicates: vec![record_name_is("a"), record_name_is("b")],
    };
    assert_eq!(
        translator.to_native(predicate).unwrap_err(),
        UnsupportedPredicateError::CompoundArity {
            operator: CompoundOperator::Not,
            expected: "exactly one",
            actual: 2,
        }
    );
}

#[test]
fn empty_and_is_rejected() {
    let table = builtin_table().unwrap();
    let translator = PredicateTranslator::new(&table, "user").unwrap();
    assert!(matches!(
        translator.to_native(StandardPredicate::and(vec![])),
        Err(UnsupportedPredicateError::CompoundArity { actual: 0, .. })
    ));
}

#[test]
fn predicate_list_fails_as_a_unit() {
    let table = builtin_table().unwrap();
    let translator = PredicateTranslator::new(&table, "user").unwrap();

    let ok = translator
        .to_native_all(vec![record_name_is("a"), record_name_is("b")])
        .unwrap();
    assert_eq!(ok.len(), 2);

    let bad = StandardPredicate::leaf(
        attrs::RECORD_NAME,
        StandardMatchType::EqualTo,
        StandardEqualityRule::None,
        "x",
    );
    assert!(translator.to_native_all(vec![record_name_is("a"), bad]).is_err());
}

// ── Native → standard ────────────────────────────────────────────

#[test]
fn native_leaf_maps_back() {
    let table = builtin_table().unwrap();
    let translator = PredicateTranslator::new(&table, "user").unwrap();
    let native = NativePredicate::Match {
        attribute: "principalName".into(),
        operator: NativeOperator::EndsWith,
        collation: NativeCollation::Exact,
        operands: vec!["@acme.com".into()],
    };
    assert_eq!(
        translator.to_standard(native).unwrap(),
        StandardPredicate::leaf(
            attrs::RECORD_NAME,
            StandardMatchType::EndsWith,
            StandardEqualityRule::CaseExact,
            "@acme.com",
        )
    );
}

#[test]
fn native_none_of_many_becomes_not_or() {
    let table = builtin_table().unwrap();
    let translator = PredicateTranslator::new(&table, "user").unwrap();
    let leaf = |name: &str| NativePredicate::Match {
        attribute: "shortname".into(),
        operator: NativeOperator::Equals,
        collation: NativeCollation::CaseFold,
        operands: vec![name.into()],
    };
    let native = NativePredicate::Junction {
        junction: NativeJunction::NoneOf,
        subpredicates: vec![leaf("a"), leaf("b")],
    };
    assert_eq!(
        translator.to_standard(native).unwrap(),
        StandardPredicate::not(StandardPredicate::or(vec![
            record_name_is("a"),
            record_name_is("b")
        ]))
    );
}

#[test]
fn native_pair_without_standard_equivalent_is_rejected() {
    let table = builtin_table().unwrap();
    let translator = PredicateTranslator::new(&table, "user").unwrap();
    let native = NativePredicate::Match {
        attribute: "uid".into(),
        operator: NativeOperator::Contains,
        collation: NativeCollation::Numeric,
        operands: vec!["5".into()],
    };
    assert_eq!(
        translator.to_standard(native).unwrap_err(),
        UnsupportedPredicateError::NativeLeaf {
            operator: NativeOperator::Contains,
            collation: NativeCollation::Numeric,
        }
    );
}

#[test]
fn empty_native_junction_is_rejected() {
    let table = builtin_table().unwrap();
    let translator = PredicateTranslator::new(&table, "user").unwrap();
    let native = NativePredicate::Junction {
        junction: NativeJunction::AnyOf,
        subpredicates: vec![],
    };
    assert!(matches!(
        translator.to_standard(native),
        Err(UnsupportedPredicateError::EmptyJunction { .. })
    ));
}

#[test]
fn every_supported_pair_survives_round_trip_in_diagnostics() {
    let table = builtin_table().unwrap();
    let translator = PredicateTranslator::new(&table, "user").unwrap();
    for &m in StandardMatchType::ALL {
        for &r in StandardEqualityRule::ALL {
            let predicate = StandardPredicate::leaf(attrs::UNIQUE_ID, m, r, "501");
            let result = translator.to_native(predicate.clone());
            if native_leaf_for(m, r).is_none() {
                assert!(result.is_err(), "{m}/{r} should be rejected");
                continue;
            }
            let back = translator.to_standard(result.unwrap()).unwrap();
            let text = describe_predicate(&back);
            assert!(text.contains(m.name()), "{text}");
            assert!(text.contains(r.name()), "{text}");
            assert_eq!(back, predicate);
        }
    }
}

// ── Serialization ────────────────────────────────────────────────

#[test]
fn predicates_serialize_with_vocabulary_names() {
    let json = serde_json::to_value(record_name_is("jdoe")).unwrap();
    assert_eq!(json["kind"], "match");
    assert_eq!(json["match_type"], "equalTo");
    assert_eq!(json["equality_rule"], "caseIgnore");
    let parsed: StandardPredicate = serde_json::from_value(json).unwrap();
    assert_eq!(parsed, record_name_is("jdoe"));
}
