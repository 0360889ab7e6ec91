use shared::api::INDEX_GREETING;

pub async fn index() -> &'static str {
    INDEX_GREETING
}
