//! Shared building blocks for the roster crates: wire types used by more
//! than one HTTP surface and the tracing subscriber setup.

pub mod types;
pub mod utils;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_type_ok() {
        let h = types::Health::ok();
        assert_eq!(h.status, "ok");
    }
}
