use convert_case::{Case, Casing};
use lineage_schema::types::NamingMode;

/// Stored spelling of a property name.
#[must_use]
pub fn property_name(name: &str, mode: NamingMode) -> String {
    match mode {
        NamingMode::Legacy => name.to_case(Case::Camel),
        NamingMode::Current => name.to_case(Case::Snake),
    }
}

#[must_use]
pub const fn type_uid(mode: NamingMode) -> &'static str {
    if mode.is_legacy() { "__typeUID" } else { "__type_uid" }
}

#[must_use]
pub const fn remote_synchronization_state(mode: NamingMode) -> &'static str {
    if mode.is_legacy() {
        "_remoteSynchronizationState"
    } else {
        "_remote_synchronization_state"
    }
}

#[must_use]
pub const fn last_remote_read(mode: NamingMode) -> &'static str {
    if mode.is_legacy() { "__lastRemoteRead" } else { "__last_remote_read" }
}

// suffix of the discriminator attribute that follows a to-one relationship
#[must_use]
pub const fn type_uid_suffix(mode: NamingMode) -> &'static str {
    if mode.is_legacy() { "TypeUID" } else { "_type_uid" }
}

#[must_use]
pub const fn extra_flag_suffix(mode: NamingMode) -> &'static str {
    if mode.is_legacy() { "ExtraFlag" } else { "_extra_flag" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn property_names_follow_the_mode() {
        assert_eq!(property_name("releaseDate", NamingMode::Legacy), "releaseDate");
        assert_eq!(property_name("release_date", NamingMode::Legacy), "releaseDate");
        assert_eq!(property_name("releaseDate", NamingMode::Current), "release_date");
        assert_eq!(property_name("title", NamingMode::Current), "title");
    }

    #[test]
    fn bookkeeping_names() {
        assert_eq!(type_uid(NamingMode::Legacy), "__typeUID");
        assert_eq!(type_uid(NamingMode::Current), "__type_uid");
        assert_eq!(
            remote_synchronization_state(NamingMode::Current),
            "_remote_synchronization_state"
        );
        assert_eq!(last_remote_read(NamingMode::Legacy), "__lastRemoteRead");
        assert_eq!(extra_flag_suffix(NamingMode::Current), "_extra_flag");
        assert_eq!(type_uid_suffix(NamingMode::Legacy), "TypeUID");
    }
}
