//! `DATABASE_URL` detection from bound services.

use tracing::debug;

use super::binding::ServiceBinding;

/// Recognized database schemes and the form frameworks expect them in.
const DATABASE_SCHEMES: &[(&str, &str)] = &[
    ("mysql", "mysql2"),
    ("mysql2", "mysql2"),
    ("postgres", "postgres"),
    ("postgresql", "postgres"),
];

/// The first bound database URI, with its scheme normalized.
///
/// Bindings whose `credentials.uri` is missing, not a string, unparsable, or
/// not a known database scheme are skipped. Everything after the scheme is
/// kept byte for byte.
pub fn database_uri<'a>(bindings: impl IntoIterator<Item = &'a ServiceBinding>) -> Option<String> {
    bindings
        .into_iter()
        .enumerate()
        .find_map(|(index, binding)| {
            let uri = binding.credentials_uri()?;
            let normalized = normalize_database_uri(uri);
            if normalized.is_none() {
                debug!(event = "core.env.database_uri_skipped", index = index);
            }
            normalized
        })
}

fn normalize_database_uri(uri: &str) -> Option<String> {
    let parsed = url::Url::parse(uri).ok()?;
    let (raw_scheme, rest) = uri.split_once(':')?;
    if !raw_scheme.eq_ignore_ascii_case(parsed.scheme()) {
        return None;
    }

    let (_, normalized) = DATABASE_SCHEMES
        .iter()
        .find(|(scheme, _)| *scheme == parsed.scheme())?;
    Some(format!("{}:{}", normalized, rest))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn with_uri(uri: serde_json::Value) -> ServiceBinding {
        ServiceBinding {
            label: Some("db".to_string()),
            credentials: Some(json!({ "uri": uri })),
            ..Default::default()
        }
    }

    #[test]
    fn test_postgres_uri_passes_through() {
        let bindings = [with_uri(json!("postgres://u:p@h:5432/d"))];
        assert_eq!(
            database_uri(&bindings),
            Some("postgres://u:p@h:5432/d".to_string())
        );
    }

    #[test]
    fn test_scheme_normalization() {
        let bindings = [with_uri(json!("postgresql://u:p@h/d"))];
        assert_eq!(database_uri(&bindings), Some("postgres://u:p@h/d".to_string()));

        let bindings = [with_uri(json!("mysql://u:p@h:3306/d?reconnect=true"))];
        assert_eq!(
            database_uri(&bindings),
            Some("mysql2://u:p@h:3306/d?reconnect=true".to_string())
        );
    }

    #[test]
    fn test_no_bindings_yields_none() {
        let bindings: [ServiceBinding; 0] = [];
        assert_eq!(database_uri(&bindings), None);
    }

    #[test]
    fn test_non_database_schemes_skipped() {
        let bindings = [
            with_uri(json!("redis://h:6379")),
            with_uri(json!("amqp://guest@h/vhost")),
        ];
        assert_eq!(database_uri(&bindings), None);
    }

    #[test]
    fn test_first_database_binding_wins() {
        let bindings = [
            ServiceBinding::default(),
            with_uri(json!(12)),
            with_uri(json!("not a uri")),
            with_uri(json!("mysql2://first/db")),
            with_uri(json!("postgres://second/db")),
        ];
        assert_eq!(database_uri(&bindings), Some("mysql2://first/db".to_string()));
    }

    #[test]
    fn test_uri_bytes_preserved() {
        let uri = "postgres://u:p%40ss@h:5432/d?sslmode=require&x=$y";
        let bindings = [with_uri(json!(uri))];
        assert_eq!(database_uri(&bindings).as_deref(), Some(uri));
    }
}
