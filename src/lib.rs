//! # Driftmail - Disposable Email Account Library
//!
//! This is a facade crate that re-exports all public APIs from the driftmail
//! service components. Use this crate to get access to the full disposable
//! email account functionality in one place.
//!
//! ## Usage
//!
//! Add to your `Cargo.toml`:
//! ```toml
//! [dependencies]
//! driftmail = { path = "../driftmail" }
//! ```
//!
//! ## Structure
//!
//! - **Core domain types**: `Username`, `Password`, `EmailAddress`, `MailDomain`, etc.
//! - **Port traits**: `MailboxProvider`, `IdentityBackend`, `LinkedAccountStore`
//! - **Use cases**: `RegisterUseCase`, `LoginUseCase`, etc.
//! - **Adapters**: `MailTmClient`, `SupabaseIdentityClient`, `PostgresLinkedAccountStore`, etc.
//! - **Service**: `DriftmailService` - The main entry point for the account service

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and value objects
pub mod core {
    pub use driftmail_core::*;
}

// Re-export most commonly used core types at the root level
pub use driftmail_core::{
    EmailAddress, EmailAddressError, IdentitySession, IdentityUser, LinkedAccount, MailDomain,
    MailboxAccount, MailboxToken, NewLinkedAccount, Password, PasswordError, Username,
    UsernameError,
};

// ============================================================================
// Port Traits
// ============================================================================

/// Port trait definitions
pub mod ports {
    pub use driftmail_core::{
        IdentityBackend, IdentityBackendError, LinkedAccountStore, LinkedAccountStoreError,
        MailboxProvider, MailboxProviderError,
    };
}

// Re-export port traits at root level
pub use driftmail_core::{
    IdentityBackend, IdentityBackendError, LinkedAccountStore, LinkedAccountStoreError,
    MailboxProvider, MailboxProviderError,
};

// ============================================================================
// Use Cases (Application Layer)
// ============================================================================

/// Application use cases
pub mod use_cases {
    pub use driftmail_application::*;
}

// Re-export use cases at root level
pub use driftmail_application::{
    ListDomainsUseCase, LoginError, LoginUseCase, LogoutError, LogoutUseCase, RegisterError,
    RegisterUseCase,
};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// HTTP route handlers
    pub mod http {
        pub use driftmail_adapters::http::*;
    }

    /// Persistence implementations
    pub mod persistence {
        pub use driftmail_adapters::persistence::*;
    }

    /// Mailbox provider client implementations
    pub mod mailbox {
        pub use driftmail_adapters::mailbox::*;
    }

    /// Identity backend client implementations
    pub mod identity {
        pub use driftmail_adapters::identity::*;
    }

    /// Configuration
    pub mod config {
        pub use driftmail_adapters::config::*;
    }
}

// Re-export commonly used adapters at root level
pub use driftmail_adapters::{
    identity::SupabaseIdentityClient,
    mailbox::MailTmClient,
    persistence::{InMemoryLinkedAccountStore, PostgresLinkedAccountStore},
};

// ============================================================================
// Service (Main Entry Point)
// ============================================================================

/// Main account service
pub use driftmail_service::{DriftmailService, configure_postgresql, get_postgres_pool};

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing port traits
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};
