use std::env;

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub db_max_connections: u32,
    pub jwt_secret: String,
    pub server_host: String,
    pub server_port: u16,
    /// Flat rate charged per seat by the default pricing policy.
    pub seat_price: i64,
    pub seed_demo_catalog: bool,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            database_url: env::var("DATABASE_URL")
                .expect("DATABASE_URL must be set"),
            db_max_connections: env::var("DB_MAX_CONNECTIONS")
                .unwrap_or_else(|_| "20".to_string())
                .parse()
                .expect("DB_MAX_CONNECTIONS must be a number"),
            jwt_secret: env::var("JWT_SECRET")
                .expect("JWT_SECRET must be set"),
            server_host: env::var("SERVER_HOST")
                .unwrap_or_else(|_| "0.0.0.0".to_string()),
            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .expect("SERVER_PORT must be a number"),
            seat_price: parse_seat_price(
                &env::var("SEAT_PRICE").unwrap_or_else(|_| "200".to_string()),
            )
            .expect("SEAT_PRICE must be a positive number"),
            seed_demo_catalog: env::var("SEED_DEMO_CATALOG")
                .unwrap_or_else(|_| "false".to_string())
                .parse()
                .expect("SEED_DEMO_CATALOG must be true or false"),
        }
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

fn parse_seat_price(raw: &str) -> Option<i64> {
    raw.trim().parse().ok().filter(|price: &i64| *price > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seat_price_must_be_positive() {
        assert_eq!(parse_seat_price("200"), Some(200));
        assert_eq!(parse_seat_price(" 75 "), Some(75));
        assert_eq!(parse_seat_price("0"), None);
        assert_eq!(parse_seat_price("-5"), None);
        assert_eq!(parse_seat_price("lots"), None);
        assert_eq!(parse_seat_price("99999999999999999999"), None);
    }
}
