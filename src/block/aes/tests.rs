use super::state::State;
use super::*;
use crate::error::Error;

#[test]
fn test_aes128_encrypt() {
    // FIPS-197 Appendix C.1
    // Key: 000102030405060708090a0b0c0d0e0f
    // Plaintext: 00112233445566778899aabbccddeeff
    // Ciphertext: 69c4e0d86a7b0430d8cdb78070b4c55a

    let key = hex::decode("000102030405060708090a0b0c0d0e0f").unwrap();
    let mut block = hex::decode("00112233445566778899aabbccddeeff").unwrap();
    let expected = hex::decode("69c4e0d86a7b0430d8cdb78070b4c55a").unwrap();

    let aes = Aes128::new(&SecretBytes::from_slice(&key).unwrap());
    aes.encrypt_block(&mut block).unwrap();

    assert_eq!(block, expected);
}

#[test]
fn test_aes128_decrypt() {
    let key = hex::decode("000102030405060708090a0b0c0d0e0f").unwrap();
    let mut block = hex::decode("69c4e0d86a7b0430d8cdb78070b4c55a").unwrap();
    let expected = hex::decode("00112233445566778899aabbccddeeff").unwrap();

    let aes = Aes128::new(&SecretBytes::from_slice(&key).unwrap());
    aes.decrypt_block(&mut block).unwrap();

    assert_eq!(block, expected);
}

#[test]
fn test_aes192_encrypt() {
    // FIPS-197 Appendix C.2
    // Key: 000102030405060708090a0b0c0d0e0f1011121314151617
    // Ciphertext: dda97ca4864cdfe06eaf70a0ec0d7191

    let key = hex::decode("000102030405060708090a0b0c0d0e0f1011121314151617").unwrap();
    let mut block = hex::decode("00112233445566778899aabbccddeeff").unwrap();
    let expected = hex::decode("dda97ca4864cdfe06eaf70a0ec0d7191").unwrap();

    let aes = Aes192::new(&SecretBytes::from_slice(&key).unwrap());
    aes.encrypt_block(&mut block).unwrap();

    assert_eq!(block, expected);
}

#[test]
fn test_aes192_decrypt() {
    let key = hex::decode("000102030405060708090a0b0c0d0e0f1011121314151617").unwrap();
    let mut block = hex::decode("dda97ca4864cdfe06eaf70a0ec0d7191").unwrap();
    let expected = hex::decode("00112233445566778899aabbccddeeff").unwrap();

    let aes = Aes192::new(&SecretBytes::from_slice(&key).unwrap());
    aes.decrypt_block(&mut block).unwrap();

    assert_eq!(block, expected);
}

#[test]
fn test_aes256_encrypt() {
    // FIPS-197 Appendix C.3
    // Key: 000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f
    // Ciphertext: 8ea2b7ca516745bfeafc49904b496089

    let key = hex::decode("000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f")
        .unwrap();
    let mut block = hex::decode("00112233445566778899aabbccddeeff").unwrap();
    let expected = hex::decode("8ea2b7ca516745bfeafc49904b496089").unwrap();

    let aes = Aes256::new(&SecretBytes::from_slice(&key).unwrap());
    aes.encrypt_block(&mut block).unwrap();

    assert_eq!(block, expected);
}

#[test]
fn test_aes256_decrypt() {
    let key = hex::decode("000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f")
        .unwrap();
    let mut block = hex::decode("8ea2b7ca516745bfeafc49904b496089").unwrap();
    let expected = hex::decode("00112233445566778899aabbccddeeff").unwrap();

    let aes = Aes256::new(&SecretBytes::from_slice(&key).unwrap());
    aes.decrypt_block(&mut block).unwrap();

    assert_eq!(block, expected);
}

#[test]
fn test_sp800_38a_single_blocks() {
    // NIST SP 800-38A F.1.1 / F.1.3 / F.1.5, first block each
    let plaintext = hex::decode("6bc1bee22e409f96e93d7e117393172a").unwrap();

    let key = hex::decode("2b7e151628aed2a6abf7158809cf4f3c").unwrap();
    let mut block = plaintext.clone();
    Aes128::new(&SecretBytes::from_slice(&key).unwrap())
        .encrypt_block(&mut block)
        .unwrap();
    assert_eq!(hex::encode(&block), "3ad77bb40d7a3660a89ecaf32466ef97");

    let key = hex::decode("8e73b0f7da0e6452c810f32b809079e562f8ead2522c6b7b").unwrap();
    let mut block = plaintext.clone();
    Aes192::new(&SecretBytes::from_slice(&key).unwrap())
        .encrypt_block(&mut block)
        .unwrap();
    assert_eq!(hex::encode(&block), "bd334f1d6e45f25ff712a214571fa5cc");

    let key = hex::decode("603deb1015ca71be2b73aef0857d77811f352c073b6108d72d9810a30914dff4")
        .unwrap();
    let mut block = plaintext;
    Aes256::new(&SecretBytes::from_slice(&key).unwrap())
        .encrypt_block(&mut block)
        .unwrap();
    assert_eq!(hex::encode(&block), "f3eed1bdb5d2a03c064b5a7e3db181f8");
}

#[test]
fn test_round_trip_all_key_sizes() {
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    let mut rng = ChaCha8Rng::seed_from_u64(7);
    for _ in 0..32 {
        let mut block = [0u8; 16];
        rng.fill(&mut block);
        let original = block;

        let aes = Aes128::new(&Aes128::generate_key(&mut rng));
        aes.encrypt_block(&mut block).unwrap();
        aes.decrypt_block(&mut block).unwrap();
        assert_eq!(block, original);

        let aes = Aes192::new(&Aes192::generate_key(&mut rng));
        aes.encrypt_block(&mut block).unwrap();
        aes.decrypt_block(&mut block).unwrap();
        assert_eq!(block, original);

        let aes = Aes256::new(&Aes256::generate_key(&mut rng));
        aes.encrypt_block(&mut block).unwrap();
        aes.decrypt_block(&mut block).unwrap();
        assert_eq!(block, original);
    }
}

#[test]
fn test_block_length_validation() {
    let aes = Aes128::new(&SecretBytes::new([0u8; 16]));
    for bad in [0usize, 1, 15, 17, 32] {
        let mut buf = vec![0u8; bad];
        assert!(matches!(
            aes.encrypt_block(&mut buf),
            Err(Error::Length { expected: 16, .. })
        ));
        assert!(matches!(
            aes.decrypt_block(&mut buf),
            Err(Error::Length { expected: 16, .. })
        ));
    }
}

#[test]
fn test_key_expansion_fips197_appendix_a() {
    // A.1: first derived words and the final word of the AES-128 schedule
    let key = hex::decode("2b7e151628aed2a6abf7158809cf4f3c").unwrap();
    let schedule = expand_key::<4, 44, 176>(&key).unwrap();
    let words = schedule.as_ref();
    assert_eq!(hex::encode(&words[16..20]), "a0fafe17");
    assert_eq!(hex::encode(&words[20..24]), "88542cb1");
    assert_eq!(hex::encode(&words[24..28]), "23a33939");
    assert_eq!(hex::encode(&words[28..32]), "2a6c7605");
    assert_eq!(hex::encode(&words[172..176]), "b6630ca6");

    // A.2: final word of the AES-192 schedule
    let key = hex::decode("8e73b0f7da0e6452c810f32b809079e562f8ead2522c6b7b").unwrap();
    let schedule = expand_key::<6, 52, 208>(&key).unwrap();
    assert_eq!(hex::encode(&schedule.as_ref()[204..208]), "01002202");

    // A.3: final word of the AES-256 schedule (exercises the extra SubWord branch)
    let key = hex::decode("603deb1015ca71be2b73aef0857d77811f352c073b6108d72d9810a30914dff4")
        .unwrap();
    let schedule = expand_key::<8, 60, 240>(&key).unwrap();
    assert_eq!(hex::encode(&schedule.as_ref()[236..240]), "706c631e");
}

#[test]
fn test_expand_key_rejects_wrong_length() {
    assert!(matches!(
        expand_key::<4, 44, 176>(&[0u8; 15]),
        Err(Error::Length { expected: 16, actual: 15, .. })
    ));
}

#[test]
fn test_rcon_bounds() {
    assert_eq!(rcon(1).unwrap(), 0x0100_0000);
    assert_eq!(rcon(9).unwrap(), 0x1b00_0000);
    assert_eq!(rcon(10).unwrap(), 0x3600_0000);
    assert!(matches!(rcon(0), Err(Error::Parameter { .. })));
    assert!(matches!(rcon(11), Err(Error::Parameter { .. })));
    assert!(matches!(rcon(255), Err(Error::Parameter { .. })));
}

#[test]
fn test_state_conversion_is_identity() {
    let block: Vec<u8> = (0u8..16).collect();
    let state = State::from_block(&block);
    let mut out = [0u8; 16];
    state.to_block(&mut out);
    assert_eq!(out[..], block[..]);
}

#[test]
fn test_shift_rows_permutation() {
    // With block bytes 0..16, FIPS row r is [r, r+4, r+8, r+12]; row 1
    // shifted left once makes entry (1, 0) come from column 1, byte 5.
    let block: Vec<u8> = (0u8..16).collect();
    let mut state = State::from_block(&block);
    state.shift_rows();
    let mut out = [0u8; 16];
    state.to_block(&mut out);
    assert_eq!(
        out,
        [0, 5, 10, 15, 4, 9, 14, 3, 8, 13, 2, 7, 12, 1, 6, 11]
    );
}

#[test]
fn test_transform_inverse_identities() {
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    let mut rng = ChaCha8Rng::seed_from_u64(99);
    for _ in 0..64 {
        let mut block = [0u8; 16];
        rng.fill(&mut block);

        let mut state = State::from_block(&block);
        state.shift_rows();
        state.inv_shift_rows();
        state.sub_bytes();
        state.inv_sub_bytes();
        state.mix_columns();
        state.inv_mix_columns();

        let mut out = [0u8; 16];
        state.to_block(&mut out);
        assert_eq!(out, block);
    }
}

#[test]
fn test_mix_columns_known_column() {
    // Classic single-column vector: db 13 53 45 -> 8e 4d a1 bc
    let mut block = [0u8; 16];
    block[..4].copy_from_slice(&[0xdb, 0x13, 0x53, 0x45]);
    let mut state = State::from_block(&block);
    state.mix_columns();
    let mut out = [0u8; 16];
    state.to_block(&mut out);
    assert_eq!(&out[..4], &[0x8e, 0x4d, 0xa1, 0xbc]);

    state.inv_mix_columns();
    state.to_block(&mut out);
    assert_eq!(out, block);
}

#[test]
fn test_sbox_tables_are_mutual_inverses() {
    use super::tables::{AES_S_BOX, INV_S_BOX};
    for x in 0u8..=255 {
        assert_eq!(INV_S_BOX[AES_S_BOX[x as usize] as usize], x);
    }
    // Spot checks against FIPS 197 Figure 7
    assert_eq!(AES_S_BOX[0x00], 0x63);
    assert_eq!(AES_S_BOX[0x53], 0xed);
    assert_eq!(AES_S_BOX[0xff], 0x16);
}

#[test]
fn test_gf_fixed_multipliers() {
    use super::gf::{mul11, mul13, mul14, mul9, xtime};

    // xtime doubles below the reduction threshold and reduces above it
    assert_eq!(xtime(0x57), 0xae);
    assert_eq!(xtime(0xae), 0x47);

    // FIPS 197 section 4.2.1: {57} x {13} = {fe}, built from doublings
    let b = 0x57u8;
    let x2 = xtime(b);
    let x4 = xtime(x2);
    let x8 = xtime(x4);
    let x10 = xtime(x8);
    assert_eq!(b ^ x2 ^ x10, 0xfe);

    // Fixed multipliers agree with their xtime decompositions everywhere
    for b in 0u8..=255 {
        let x2 = xtime(b);
        let x4 = xtime(x2);
        let x8 = xtime(x4);
        assert_eq!(mul9(b), x8 ^ b);
        assert_eq!(mul11(b), x8 ^ x2 ^ b);
        assert_eq!(mul13(b), x8 ^ x4 ^ b);
        assert_eq!(mul14(b), x8 ^ x4 ^ x2);
    }
}
