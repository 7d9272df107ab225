//! Shape conversions applied to resolver output before it lands in a result.
//!
//! Both helpers are one-to-one: order and length are preserved, nothing is
//! filtered or deduplicated.

use std::fmt::Display;

/// Renders each value with its `Display` form.
pub fn to_strings<I>(values: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: Display,
{
    values.into_iter().map(|v| v.to_string()).collect()
}

/// Converts resolver-native records into their script-facing form.
pub fn lift<T, U, I>(records: I) -> Vec<U>
where
    I: IntoIterator<Item = T>,
    U: From<T>,
{
    records.into_iter().map(U::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

    #[test]
    fn test_to_strings_keeps_order_and_duplicates() {
        let ips = vec![
            IpAddr::V6(Ipv6Addr::LOCALHOST),
            IpAddr::V4(Ipv4Addr::new(10, 0, 0, 1)),
            IpAddr::V6(Ipv6Addr::LOCALHOST),
        ];
        assert_eq!(to_strings(&ips), vec!["::1", "10.0.0.1", "::1"]);
    }

    #[test]
    fn test_to_strings_empty() {
        let empty: Vec<u16> = Vec::new();
        assert!(to_strings(empty).is_empty());
    }

    #[derive(Debug, PartialEq)]
    struct Wide(u32);

    impl From<u16> for Wide {
        fn from(v: u16) -> Self {
            Wide(u32::from(v))
        }
    }

    #[test]
    fn test_lift_is_one_to_one() {
        let lifted: Vec<Wide> = lift(vec![3u16, 1, 2]);
        assert_eq!(lifted, vec![Wide(3), Wide(1), Wide(2)]);
    }
}
