use chrono::{DateTime, SubsecRound, Utc};
use sqlx::PgPool;

#[derive(Clone)]
pub struct SqlxUserRepo {
    pub pool: PgPool,
}

#[derive(Clone)]
pub struct SqlxAboutRepo {
    pub pool: PgPool,
}

#[derive(Clone)]
pub struct SqlxBlogPostRepo {
    pub pool: PgPool,
}

#[derive(Clone)]
pub struct SqlxProjectRepo {
    pub pool: PgPool,
}

#[derive(Clone)]
pub struct SqlxExperienceRepo {
    pub pool: PgPool,
}

#[derive(Clone)]
pub struct SqlxCertificateRepo {
    pub pool: PgPool,
}

#[derive(Clone)]
pub struct SqlxCvFileRepo {
    pub pool: PgPool,
}

#[derive(Clone)]
pub struct SqlxMessageRepo {
    pub pool: PgPool,
}

/// Current time at the microsecond precision `TIMESTAMPTZ` keeps, so a
/// record returned from an insert equals the row read back later.
pub fn db_now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}
