//! Reversible share-code scheme for reproducible wheel sequences.
//! Code format: FW-<WORD><NN>, e.g., FW-DISCO42, FW-TANGO07

fn fnv1a64(bytes: &[u8]) -> u64 {
    const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const FNV_PRIME: u64 = 0x0100_0000_01b3;
    let mut hash = FNV_OFFSET;
    for b in bytes {
        hash = (hash ^ u64::from(*b)).wrapping_mul(FNV_PRIME);
    }
    hash
}

fn sanitize_word(word: &str) -> String {
    word.chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

// Word list for share codes
pub const WORD_LIST: [&str; 64] = [
    "DISCO", "TANGO", "CONGA", "LIMBO", "SALSA", "POLKA", "MAMBO", "RUMBA", "WIGGLE", "GIGGLE",
    "CACKLE", "SNORT", "CHICKEN", "ROBOT", "OPERA", "KAZOO", "BANJO", "MARACA", "CONFETTI",
    "BALLOON", "PINATA", "STREAMER", "GLITTER", "SPARKLE", "WHIRL", "TWIRL", "SPIN", "WHEEL",
    "POINTER", "SEGMENT", "JACKPOT", "FORFEIT", "DARE", "TRUTH", "MIMIC", "CHARADE", "KARAOKE",
    "ENCORE", "CURTAIN", "SPOTLIGHT", "JESTER", "CLOWN", "PRANK", "TICKLE", "NOODLE", "PICKLE",
    "WAFFLE", "TACO", "NACHO", "MANGO", "BANANA", "PEANUT", "POPCORN", "PRETZEL", "GUMBALL",
    "SHERBET", "SUNDAE", "CUPCAKE", "DONUT", "BUBBLE", "SQUEAK", "HICCUP", "WOBBLE", "BOUNCE",
];

#[inline]
fn pack(word_index: u16, nn: u8) -> u16 {
    word_index & 0x003F | ((u16::from(nn) & 0x7F) << 6)
}

#[inline]
fn unpack(packed: u16) -> (u16, u8) {
    (packed & 0x003F, ((packed >> 6) & 0x7F) as u8)
}

fn compose_seed(word_index: u16, nn: u8) -> u64 {
    let packed = pack(word_index, nn);
    // Domain-separated FNV input
    let mut buf = [0u8; 10];
    buf[..7].copy_from_slice(b"FORFEIT");
    buf[7] = (packed & 0xFF) as u8;
    buf[8] = (packed >> 8) as u8;
    buf[9] = 0x5A;
    let h = fnv1a64(&buf);
    (h & 0xFFFF_FFFF_FFFF_0000) | u64::from(packed)
}

#[must_use]
pub fn encode_friendly(seed: u64) -> String {
    let packed = (seed & 0xFFFF) as u16;
    let (wi, mut nn) = unpack(packed);
    let word = WORD_LIST.get(wi as usize).copied().unwrap_or("DISCO");
    if nn > 99 {
        nn %= 100;
    }
    format!("FW-{word}{nn:02}")
}

#[must_use]
pub fn decode_to_seed(code: &str) -> Option<u64> {
    let s = code.trim();
    let (prefix, rest) = s.split_once('-')?;
    if !prefix.eq_ignore_ascii_case("FW") {
        return None;
    }
    if rest.len() < 3 {
        return None;
    }
    let (word_part, nn_part) = rest.split_at(rest.len() - 2);
    let nn: u8 = nn_part.parse().ok()?;
    let word = sanitize_word(word_part);
    let idx = WORD_LIST.iter().position(|w| sanitize_word(w) == word)?;
    let wi = u16::try_from(idx).ok()?;
    Some(compose_seed(wi, nn))
}

#[must_use]
pub fn generate_code_from_entropy(entropy: u64) -> String {
    let wi = u16::try_from(entropy % WORD_LIST.len() as u64).unwrap_or(0);
    let nn = ((entropy >> 13) % 100) as u8;
    let seed = compose_seed(wi, nn);
    encode_friendly(seed)
}
