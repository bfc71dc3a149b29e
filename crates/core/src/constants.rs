//! Shared constants for dishpick.

/// PostgreSQL connection pool: maximum connections.
pub const PG_POOL_MAX_CONNECTIONS: u32 = 20;

/// PostgreSQL connection pool: acquire timeout in seconds.
pub const PG_POOL_ACQUIRE_TIMEOUT_SECS: u64 = 10;

/// PostgreSQL connection pool: idle timeout in seconds.
pub const PG_POOL_IDLE_TIMEOUT_SECS: u64 = 300;

/// Environment variables accepted for the database connection string,
/// in priority order. The first non-empty one wins.
pub const DATABASE_URL_VARS: &[&str] =
    &["NEON_URL", "DATABASE_URL", "POSTGRES_URL", "NEON_DATABASE_URL"];

/// Environment variable naming the deployment environment (`production`, ...).
pub const APP_ENV_VAR: &str = "DISHPICK_ENV";

/// Error message when no database connection string is configured.
pub const DATABASE_NOT_CONFIGURED: &str =
    "Database URL environment variable is not set (NEON_URL or DATABASE_URL)";

/// Fallback menu used when nothing is stored yet.
pub const PRESET_DISHES: &[&str] = &[
    "红烧肉",
    "糖醋排骨",
    "宫保鸡丁",
    "鱼香肉丝",
    "麻婆豆腐",
    "回锅肉",
    "青椒肉丝",
    "蒜泥白肉",
    "水煮鱼",
    "口水鸡",
    "酸辣土豆丝",
    "蒜蓉菠菜",
    "清炒小白菜",
    "番茄炒蛋",
    "韭菜炒蛋",
    "红烧鲫鱼",
    "清蒸鲈鱼",
    "白灼虾",
    "油爆虾",
    "糟凤爪",
    "腌笃鲜",
    "三鲜汤",
    "萝卜煨肉汤",
    "荠菜豆腐羹",
    "蘑菇汤",
];

/// Seed rows written by `init-db` into an empty table.
pub const SAMPLE_DISHES: &[&str] = PRESET_DISHES.split_at(10).0;

/// Shortest dish name (in characters) accepted from an imported menu file.
pub const MIN_MENU_NAME_CHARS: usize = 2;
