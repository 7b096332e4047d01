//! Property-based tests for command assembly.

use super::{CommandAssembler, RunMode};
use crate::config::{Chain, CommandTable, ConfigDocument, Header, TableValue, BUILD_FIELD};
use crate::overrides::Override;
use proptest::prelude::*;

// Key names without underscores, so they always classify as plain keys
fn key_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-zA-Z0-9]{0,8}"
}

// Values never contain spaces, so spacing in the output is ours alone
fn value_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9./-]{1,12}"
}

fn single_layer(keys: &[String], values: &[String]) -> Chain {
    let mut table = CommandTable::new("x").with(BUILD_FIELD, TableValue::Tokens(keys.to_vec()));
    for (key, value) in keys.iter().zip(values) {
        table = table.with(key.clone(), TableValue::Text(value.clone()));
    }
    let header = Header {
        name: "t".to_string(),
        kind: None,
        include: None,
        source: None,
    };
    Chain::new(vec![ConfigDocument::new("t.toml", header, vec![table])]).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 500,
        .. ProptestConfig::default()
    })]

    // Identical inputs always give identical text
    #[test]
    fn assembly_is_deterministic(
        entries in prop::collection::vec((key_strategy(), value_strategy()), 0..8),
        source in "[a-z./]{1,10}",
    ) {
        let (keys, values): (Vec<_>, Vec<_>) = entries.into_iter().unzip();
        let chain = single_layer(&keys, &values);
        let assembler = CommandAssembler::new();

        let first = assembler.assemble("x", &chain, &source, RunMode::Build, None);
        let second = assembler.assemble("x", &chain, &source, RunMode::Build, None);
        prop_assert_eq!(first.map(|c| c.text).ok(), second.map(|c| c.text).ok());
    }

    // A sequence of plain keys is the space-joined values with a leading
    // and trailing space
    #[test]
    fn plain_keys_are_space_joined(
        entries in prop::collection::btree_map(key_strategy(), value_strategy(), 1..8),
    ) {
        let (keys, values): (Vec<_>, Vec<_>) = entries.into_iter().unzip();
        let chain = single_layer(&keys, &values);

        let cmd = CommandAssembler::new()
            .assemble("x", &chain, "src/", RunMode::Build, None)
            .unwrap();
        prop_assert_eq!(cmd.text, format!(" {} ", values.join(" ")));
    }

    // Overriding a key replaces exactly that piece of the output
    #[test]
    fn override_replaces_one_value(
        entries in prop::collection::btree_map(key_strategy(), value_strategy(), 1..8),
        pick in any::<prop::sample::Index>(),
        replacement in value_strategy(),
    ) {
        let (keys, values): (Vec<_>, Vec<_>) = entries.into_iter().unzip();
        let chain = single_layer(&keys, &values);
        let index = pick.index(keys.len());
        let ov = Override::new(&keys[index], &replacement);

        let cmd = CommandAssembler::new()
            .assemble("x", &chain, "src/", RunMode::Build, Some(&ov))
            .unwrap();

        let mut expected = values.clone();
        expected[index] = replacement;
        prop_assert_eq!(cmd.text, format!(" {} ", expected.join(" ")));
    }

    // Parsing an override never panics and round-trips the key
    #[test]
    fn override_parse_splits_at_first_colon(
        key in "[a-zA-Z]{0,8}",
        value in "[a-zA-Z0-9:]{0,12}",
    ) {
        let ov = Override::parse(&format!("{key}:{value}")).unwrap();
        prop_assert_eq!(ov.key(), key.as_str());
        prop_assert_eq!(ov.replacement(), format!(" {value}"));
    }
}
