use envy::{Cause, EnvAccessor, MemoryEnv};
use proptest::prelude::*;

const KEY: &str = "PROPERTY_KEY";

fn accessor_with(value: &str) -> EnvAccessor<MemoryEnv> {
    EnvAccessor::new(MemoryEnv::new().with_var(KEY, value))
}

proptest! {
    #[test]
    fn prop_missing_key_is_not_found(key in "[A-Z_][A-Z0-9_]{0,31}") {
        let accessor = EnvAccessor::new(MemoryEnv::new());

        prop_assert_eq!(accessor.get_string(&key).unwrap_err().cause(), Cause::NotFound);
        prop_assert_eq!(accessor.get_bool(&key).unwrap_err().cause(), Cause::NotFound);
        prop_assert_eq!(accessor.get_int(&key, 0, 64).unwrap_err().cause(), Cause::NotFound);
        prop_assert_eq!(accessor.get_float(&key, 64).unwrap_err().cause(), Cause::NotFound);
    }

    #[test]
    fn prop_string_round_trips_non_empty(value in ".{1,64}") {
        prop_assert_eq!(accessor_with(&value).get_string(KEY), Ok(value.clone()));
    }

    #[test]
    fn prop_reads_are_idempotent(value in ".{0,32}") {
        let accessor = accessor_with(&value);

        let first = (
            accessor.get_bool(KEY),
            accessor.get_int(KEY, 0, 32),
            accessor.get_float(KEY, 32).map(f64::to_bits),
        );
        let second = (
            accessor.get_bool(KEY),
            accessor.get_int(KEY, 0, 32),
            accessor.get_float(KEY, 32).map(f64::to_bits),
        );
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_bool_grammar_is_closed(value in "[a-zA-Z0-9]{1,6}") {
        let known = ["1", "t", "T", "TRUE", "true", "True", "0", "f", "F", "FALSE", "false", "False"];
        let got = accessor_with(&value).get_bool(KEY);
        if known.contains(&value.as_str()) {
            prop_assert!(got.is_ok());
        } else {
            prop_assert_eq!(got.unwrap_err().cause(), Cause::Syntax);
        }
    }

    #[test]
    fn prop_int_in_range_parses(n in any::<i32>()) {
        let accessor = accessor_with(&n.to_string());

        prop_assert_eq!(accessor.get_int(KEY, 10, 32), Ok(i64::from(n)));
        prop_assert_eq!(accessor.get_int(KEY, 0, 64), Ok(i64::from(n)));
    }

    #[test]
    fn prop_float_display_round_trips(x in any::<f64>().prop_filter("finite", |x| x.is_finite())) {
        prop_assert_eq!(accessor_with(&x.to_string()).get_float(KEY, 64), Ok(x));
    }
}
