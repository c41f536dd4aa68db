use serenity::all::UserId;

/// Resolves the display prefix for a relayed message.
///
/// Pure and deterministic: the same (user, guild) pair always resolves to the
/// same pseudonym, so repeated messages from one author are attributable to
/// each other within a guild without revealing the author. Pseudonyms are
/// salted with the guild id, so the same user reads differently across
/// guilds.
pub fn compute_prefix(user_id: UserId, guild: &entity::guild::Model) -> String {
    let mut hash = fnv1a(0xcbf2_9ce4_8422_2325, guild.guild_id.as_bytes());
    hash = fnv1a(hash, &user_id.get().to_le_bytes());

    format!("anon-{:04x}", hash & 0xffff)
}

/// FNV-1a over `bytes`, continuing from `state`.
fn fnv1a(state: u64, bytes: &[u8]) -> u64 {
    bytes.iter().fold(state, |hash, byte| {
        (hash ^ u64::from(*byte)).wrapping_mul(0x0000_0100_0000_01b3)
    })
}
