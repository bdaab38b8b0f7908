use rand::Rng;

const SESSION_ID_BYTE_COUNT: usize = 3;

/// Short hex session id, e.g. "a3f09c".
pub fn generate_session_id() -> String {
    let mut rng = rand::rng();
    let bytes: [u8; SESSION_ID_BYTE_COUNT] = rng.random();
    bytes.iter().map(|byte| format!("{:02x}", byte)).collect()
}
