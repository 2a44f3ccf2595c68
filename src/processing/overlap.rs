//! Overlap detection across all configured subnets.

use super::SubnetRegistry;
use crate::error::{ConfigError, Result};

impl SubnetRegistry {
    /// Fail if any two recorded subnets overlap, regardless of role.
    ///
    /// Two ranges overlap when either one contains the other's network
    /// address. This catches duplicates, subsets and supersets. Only the
    /// first conflict in append order is reported.
    pub fn check_for_overlaps(&self) -> Result<()> {
        for (i, si) in self.subnets.iter().enumerate() {
            for sj in &self.subnets[..i] {
                if si.subnet.contains(&sj.subnet.network()) || sj.subnet.contains(&si.subnet.network())
                {
                    log::warn!(
                        "{} {} overlaps {} {}",
                        si.role,
                        si.subnet,
                        sj.role,
                        sj.subnet
                    );
                    return Err(ConfigError::SubnetOverlap {
                        role: si.role,
                        subnet: si.subnet,
                        other_role: sj.role,
                        other_subnet: sj.subnet,
                    });
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SubnetRole;
    use ipnet::IpNet;

    fn nets(list: &[&str]) -> Vec<IpNet> {
        list.iter().map(|s| s.parse().unwrap()).collect()
    }

    fn check(cidrs: &[&str], join_subnets: &[&str]) -> Result<()> {
        let mut registry = SubnetRegistry::new();
        registry.extend(SubnetRole::Join, nets(join_subnets));
        registry.extend(SubnetRole::Cluster, nets(cidrs));
        registry.check_for_overlaps()
    }

    #[test]
    fn test_no_overlap() {
        let cases: &[(&str, &[&str], &[&str])] = &[
            ("empty cidr list", &[], &[]),
            ("non-overlapping", &["10.132.0.0/26", "10.133.0.0/26"], &[]),
            (
                "non-overlapping V4 entries",
                &["10.132.0.0/26", "192.168.0.0/16", "172.16.0.0/16"],
                &[],
            ),
            (
                "non-overlapping V6 entries",
                &["fd98:8000::/65", "fd99::/64", "fd98:1::/64"],
                &[],
            ),
            (
                "disjoint V6 entries sharing a supernet",
                &["fd98:1::/64"],
                &["100.64.0.0/16", "fd98::/64"],
            ),
            (
                "mixed families never overlap",
                &["10.0.0.0/8", "fd00::/8"],
                &[],
            ),
        ];
        for (name, cidrs, join) in cases {
            assert!(
                check(cidrs, join).is_ok(),
                "testcase {name:?} erroneously found overlap"
            );
        }
    }

    #[test]
    fn test_overlap() {
        let cases: &[(&str, &[&str], &[&str])] = &[
            ("duplicate entry", &["10.132.0.0/26", "10.132.0.0/26"], &[]),
            ("proper subset", &["10.132.0.0/26", "10.0.0.0/8"], &[]),
            ("proper superset", &["10.0.0.0/8", "10.133.0.0/26"], &[]),
            ("overlap", &["10.1.0.0/14", "10.0.0.0/15"], &[]),
            (
                "equal to V4 join subnet",
                &["100.64.0.0/16"],
                &["100.64.0.0/16", "fd98::/64"],
            ),
            (
                "equal to V6 join subnet",
                &["fd90::/48"],
                &["100.64.0.0/16", "fd90::/48"],
            ),
            (
                "overlapping V4 join subnet",
                &["100.63.128.0/17"],
                &["100.63.0.0/16", "fd98::/64"],
            ),
            (
                "overlapping V6 join subnet",
                &["fd99::/68"],
                &["100.64.0.0/16", "fd99::/64"],
            ),
            (
                "encompassing the V4 join subnet",
                &["100.0.0.0/8"],
                &["100.64.0.0/16", "fd98::/64"],
            ),
            (
                "encompassing the V6 join subnet",
                &["fd98::/63"],
                &["100.64.0.0/16", "fd98::/64"],
            ),
        ];
        for (name, cidrs, join) in cases {
            assert!(
                matches!(check(cidrs, join), Err(ConfigError::SubnetOverlap { .. })),
                "testcase {name:?} failed to find overlap"
            );
        }
    }

    #[test]
    fn test_overlap_reports_first_conflict() {
        let mut registry = SubnetRegistry::new();
        registry.append(SubnetRole::Join, "100.64.0.0/16".parse().unwrap());
        registry.append(SubnetRole::Cluster, "10.128.0.0/14".parse().unwrap());
        registry.append(SubnetRole::Service, "100.64.0.0/24".parse().unwrap());
        registry.append(SubnetRole::Hybrid, "10.128.0.0/16".parse().unwrap());

        let err = registry.check_for_overlaps().unwrap_err();
        assert_eq!(
            err.to_string(),
            r#"illegal network configuration: service subnet "100.64.0.0/24" overlaps built-in join subnet "100.64.0.0/16""#
        );
    }
}
