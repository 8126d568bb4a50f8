pub mod supabase_identity_client;

pub use supabase_identity_client::SupabaseIdentityClient;
