use super::*;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

/// Build the metadata URL for a token: the fixed data URL prefix followed by
/// the base64 encoding of the JSON metadata document. Stripping the prefix
/// and decoding the remainder yields the exact document bytes, so the URL is
/// fully self contained.
pub fn build_token_metadata_url(
    token_id: &ContractTokenId,
    description: &str,
    token: &TokenData,
) -> String {
    let document = build_token_metadata_json(token_id, description, token);
    let mut url = String::from(TOKEN_METADATA_URL_PREFIX);
    url.push_str(&STANDARD.encode(document.as_bytes()));
    url
}

/// Build the JSON metadata document for a token: the token name derived from
/// the decimal token ID, the contract wide description and the two strings
/// recorded at mint time.
pub fn build_token_metadata_json(
    token_id: &ContractTokenId,
    description: &str,
    token: &TokenData,
) -> String {
    let mut document = String::from("{\"name\": ");
    let mut name = String::from(TOKEN_NAME_PREFIX);
    push_token_id(&mut name, token_id);
    push_json_string(&mut document, &name);
    document.push_str(", \"description\": ");
    push_json_string(&mut document, description);
    document.push_str(", \"share\": ");
    push_json_string(&mut document, &token.share);
    document.push_str(", \"NFTData\": ");
    push_json_string(&mut document, &token.data);
    document.push('}');
    document
}

/// Append the decimal representation of the token ID.
pub fn push_token_id(string: &mut String, token_id: &ContractTokenId) {
    let mut digits = [0u8; 20];
    let mut remainder = token_id.0;
    let mut len = 0;
    loop {
        digits[len] = b'0' + (remainder % 10) as u8;
        remainder /= 10;
        len += 1;
        if remainder == 0 {
            break;
        }
    }
    while len > 0 {
        len -= 1;
        string.push(digits[len] as char);
    }
}

/// Append a JSON string literal holding `value`. The characters JSON cannot
/// carry raw are escaped, everything else is appended verbatim.
pub fn push_json_string(string: &mut String, value: &str) {
    string.push('"');
    for c in value.chars() {
        match c {
            '"' => string.push_str("\\\""),
            '\\' => string.push_str("\\\\"),
            '\n' => string.push_str("\\n"),
            '\r' => string.push_str("\\r"),
            '\t' => string.push_str("\\t"),
            c if (c as u32) < 0x20 => {
                string.push_str("\\u00");
                string.push(bits_to_hex_char(c as u8 >> 4));
                string.push(bits_to_hex_char(c as u8 & 0xF));
            }
            c => string.push(c),
        }
    }
    string.push('"');
}

pub fn bits_to_hex_char(bits: u8) -> char {
    match bits & 0xF {
        0x0..=0x9 => (bits + b'0') as char,
        0xA..=0xF => (bits - 10 + b'A') as char,
        _ => unreachable!(),
    }
}

#[concordium_cfg_test]
mod tests {
    use super::*;
    use test_infrastructure::*;

    fn token(share: &str, data: &str) -> TokenData {
        TokenData {
            minter: Address::Account(AccountAddress([7u8; 32])),
            owner: Address::Account(AccountAddress([7u8; 32])),
            share: String::from(share),
            data: String::from(data),
        }
    }

    #[concordium_test]
    fn token_id_formatting() {
        let mut cases = Vec::new();
        cases.push((0u64, "0"));
        cases.push((7, "7"));
        cases.push((10, "10"));
        cases.push((409, "409"));
        cases.push((1_000_000, "1000000"));
        cases.push((u64::MAX, "18446744073709551615"));

        for (id, expected) in cases {
            let mut string = String::new();
            push_token_id(&mut string, &TokenIdU64(id));
            claim_eq!(string, expected);
        }
    }

    #[concordium_test]
    fn json_string_escaping() {
        let mut plain = String::new();
        push_json_string(&mut plain, "ipfs://QmTest");
        claim_eq!(plain, "\"ipfs://QmTest\"");

        let mut escaped = String::new();
        push_json_string(&mut escaped, "a\"b\\c\nd\u{1}");
        claim_eq!(escaped, "\"a\\\"b\\\\c\\nd\\u0001\"");
    }

    /// The document must carry exactly the four fields, with the name built
    /// from the decimal token ID and the remaining values verbatim.
    #[concordium_test]
    fn metadata_document() {
        let document = build_token_metadata_json(&TokenIdU64(0), "D", &token("0.001", "ipfs://X"));
        claim_eq!(
            document,
            "{\"name\": \"token #0\", \"description\": \"D\", \"share\": \"0.001\", \"NFTData\": \"ipfs://X\"}"
        );
    }

    /// The payload after the fixed prefix must decode back to the exact
    /// document bytes.
    #[concordium_test]
    fn metadata_url_decodes_to_document() {
        let token = token("0.001", "ipfs://QmTest");
        let description = "Seasonal athlete returns";
        let token_id = TokenIdU64(42);

        let url = build_token_metadata_url(&token_id, description, &token);
        claim!(url.starts_with(TOKEN_METADATA_URL_PREFIX));

        let payload = &url[TOKEN_METADATA_URL_PREFIX.len()..];
        let decoded = STANDARD
            .decode(payload)
            .expect_report("Payload is not valid base64");
        claim_eq!(
            decoded,
            build_token_metadata_json(&token_id, description, &token).into_bytes()
        );
    }

    /// Rendering twice for the same record gives identical output.
    #[concordium_test]
    fn metadata_url_is_deterministic() {
        let token = token("0.5", "https://example.com/data/1");
        let first = build_token_metadata_url(&TokenIdU64(1), "D", &token);
        let second = build_token_metadata_url(&TokenIdU64(1), "D", &token);
        claim_eq!(first, second);
    }
}
