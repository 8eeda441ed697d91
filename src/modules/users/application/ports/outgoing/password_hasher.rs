/// Hashing primitive behind the upsert services. Synchronous on
/// purpose: cost tuning is the adapter's business.
pub trait PasswordHasher: Send + Sync {
    fn hash_password(&self, password: &str) -> Result<String, String>;

    fn verify_password(&self, password: &str, hash: &str) -> Result<bool, String>;
}
