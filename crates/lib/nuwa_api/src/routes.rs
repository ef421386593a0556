//! Route path constants.

/// GET /: service banner
pub const GET_ROOT: &str = "/";

/// GET /health: liveness and server time
pub const GET_HEALTH: &str = "/health";

/// POST /chat: assistant reply for one message
pub const POST_CHAT: &str = "/chat";

/// POST /api/chat: same as POST /chat
pub const POST_API_CHAT: &str = "/api/chat";

/// POST /correction: rule-based correction and translation
pub const POST_CORRECTION: &str = "/correction";

/// POST /process: reply, correction and translation together
pub const POST_PROCESS: &str = "/process";

/// /api/auth: mount point, not implemented
pub const API_AUTH: &str = "/api/auth";

/// /api/auth/*: mount point, not implemented
pub const API_AUTH_ANY: &str = "/api/auth/{*rest}";

/// /api/user: mount point, not implemented
pub const API_USER: &str = "/api/user";

/// /api/user/*: mount point, not implemented
pub const API_USER_ANY: &str = "/api/user/{*rest}";
