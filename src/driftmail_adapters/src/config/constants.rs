pub mod env {
    pub const DATABASE_URL_ENV_VAR: &str = "DRIFTMAIL_POSTGRES__URL";
    pub const IDENTITY_BASE_URL_ENV_VAR: &str = "DRIFTMAIL_IDENTITY_BACKEND__BASE_URL";
    pub const IDENTITY_ANON_KEY_ENV_VAR: &str = "DRIFTMAIL_IDENTITY_BACKEND__ANON_KEY";
}

pub mod prod {
    pub const APP_ADDRESS: &str = "0.0.0.0:3000";
    pub const ASSETS_DIR: &str = "assets";
    pub const REDIRECT_TO: &str = "http://localhost:3000/auth/callback";

    pub mod mailbox_provider {
        pub const BASE_URL: &str = "https://api.mail.tm";
        pub const TIMEOUT_IN_MILLIS: u64 = 10_000;
    }

    pub mod identity_backend {
        pub const TIMEOUT_IN_MILLIS: u64 = 10_000;
    }
}

pub mod test {
    pub const APP_ADDRESS: &str = "127.0.0.1:0";
    pub const TIMEOUT_IN_MILLIS: u64 = 2_000;
}
