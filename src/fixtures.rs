#[cfg(test)]
pub mod test {
    use crate::env::EnvTable;
    use crate::flagset::FlagSet;

    /// One flag per common type. Names mix hyphens and digits so key mapping
    /// gets exercised: `string3-env-like` maps to `STRING3_ENV_LIKE`.
    pub fn standard_flags() -> FlagSet {
        let mut flags = FlagSet::new("test");
        flags
            .bool("bool", false, "bool value")
            .bool("bool2", false, "bool2 value")
            .define("int", 0i64, "int value")
            .define("int64", 0i64, "int64 value")
            .define("uint", 0u64, "uint value")
            .define("uint64", 0u64, "uint64 value")
            .string("string", "0", "string value")
            .string("string2", "0", "string2 value")
            .string("string3-env-like", "0", "string3 value")
            .define("float64", 0f64, "float64 value");
        flags
    }

    pub fn env(pairs: &[(&str, &str)]) -> EnvTable {
        EnvTable::from_vars(pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())))
    }

    #[test]
    fn standard_flags_defaults() {
        let flags = standard_flags();
        assert_eq!(flags.get::<bool>("bool2"), Some(false));
        assert_eq!(flags.get::<u64>("uint64"), Some(0));
        assert_eq!(flags.get::<f64>("float64"), Some(0.0));
        assert_eq!(flags.flags().count(), 10);
    }

    #[test]
    fn env_helper_builds_table() {
        let table = env(&[("A", "1"), ("B", "")]);
        assert_eq!(table.get("A"), Some("1"));
        assert_eq!(table.get("B"), Some(""));
        assert_eq!(table.len(), 2);
    }
}
