//! src/crypto/kdf/pbkdf2.rs
//! One-shot PBKDF2 over a keyed PRF, written straight into the caller's buffer

use tracing::{debug, trace};

use crate::aliases::{
    HmacSha1, HmacSha256, HmacSha384, HmacSha512, MacBlock64, PasswordBytes, SpanBuffer,
};
use crate::consts::{EMPTY_PASSWORD_KEY, MAX_BLOCK_COUNT, MAX_MAC_OUTPUT_LEN, PBKDF2_MIN_ITER};
use crate::crypto::algorithm::MacAlgorithm;
use crate::crypto::hmac::MacProvider;
use crate::utils::{encode_block_counter, xor_in_place};
use crate::Pbkdf2Error;

/// Derive PBKDF2 output for `algorithm` directly into `destination`.
///
/// `destination` is filled completely, left to right. `salt` and `destination`
/// are only borrowed for the duration of the call; nothing is retained.
///
/// # Errors
///
/// - [`Pbkdf2Error::InvalidArgument`] if `iterations` is `0` or `destination`
///   needs more than `u32::MAX` blocks
/// - [`Pbkdf2Error::Failure`] if the MAC primitive rejects the password as a key
///
/// Every error above is reported before the first byte of `destination` is
/// written.
#[inline]
pub fn derive(
    algorithm: MacAlgorithm,
    password: &[u8],
    salt: Option<&[u8]>,
    iterations: u32,
    destination: &mut [u8],
) -> Result<(), Pbkdf2Error> {
    match algorithm {
        MacAlgorithm::HmacSha1 => derive_with::<HmacSha1>(password, salt, iterations, destination),
        MacAlgorithm::HmacSha256 => {
            derive_with::<HmacSha256>(password, salt, iterations, destination)
        }
        MacAlgorithm::HmacSha384 => {
            derive_with::<HmacSha384>(password, salt, iterations, destination)
        }
        MacAlgorithm::HmacSha512 => {
            derive_with::<HmacSha512>(password, salt, iterations, destination)
        }
    }
}

/// Same as [`derive`], with the algorithm given by name (`"HmacSHA256"`, `"SHA-1"`, ...).
///
/// # Errors
///
/// - [`Pbkdf2Error::InvalidArgument`] for an empty name or bad parameters
/// - [`Pbkdf2Error::UnsupportedAlgorithm`] if the name resolves to no provider;
///   no MAC call is made and `destination` is left untouched
pub fn derive_named(
    algorithm: &str,
    password: &[u8],
    salt: Option<&[u8]>,
    iterations: u32,
    destination: &mut [u8],
) -> Result<(), Pbkdf2Error> {
    check_iterations(iterations)?;

    let algorithm = MacAlgorithm::from_name(algorithm).inspect_err(|e| {
        debug!(algorithm, error = %e, "rejected PBKDF2 algorithm");
    })?;

    derive(algorithm, password, salt, iterations, destination)
}

/// The PBKDF2 engine, generic over the MAC provider.
///
/// For block `i = 1, 2, ...`:
/// `U1 = PRF(salt || INT(i))`, `Uj = PRF(U{j-1})`, `T = U1 ^ ... ^ Uc`.
/// Each `T` is copied into the next `hLen` bytes of `destination`; the last
/// block is truncated to the space left. The salt slice is read once per block
/// and never consumed.
///
/// # Errors
///
/// - [`Pbkdf2Error::InvalidArgument`] as for [`derive`]
/// - [`Pbkdf2Error::Failure`] if `P::init` fails, or if `P::output_len()` is `0`
///   or more than [`MAX_MAC_OUTPUT_LEN`] bytes
///
/// All of these are detected before `destination` is written. The trait's
/// `update`/`finish_into` cannot fail, so a derivation that gets past keying
/// always fills `destination` completely.
pub fn derive_with<P: MacProvider>(
    password: &[u8],
    salt: Option<&[u8]>,
    iterations: u32,
    destination: &mut [u8],
) -> Result<(), Pbkdf2Error> {
    check_iterations(iterations)?;

    let block_len = P::output_len();
    if block_len == 0 || block_len > MAX_MAC_OUTPUT_LEN {
        return Err(Pbkdf2Error::Failure(format!(
            "MAC output length {block_len} outside 1..={MAX_MAC_OUTPUT_LEN}"
        )));
    }

    let block_count = destination.len().div_ceil(block_len);
    if block_count > MAX_BLOCK_COUNT as usize {
        debug!(block_count, "rejected PBKDF2 output length");
        return Err(Pbkdf2Error::InvalidArgument(format!(
            "output of {} bytes needs {block_count} blocks (max {MAX_BLOCK_COUNT})",
            destination.len()
        )));
    }

    trace!(
        algorithm = P::name(),
        iterations,
        output_len = destination.len(),
        block_len,
        block_count,
        "PBKDF2 derive"
    );

    let key: &[u8] = if password.is_empty() {
        &EMPTY_PASSWORD_KEY
    } else {
        password
    };
    let keyed = P::init(key)?;

    let mut u_buf = MacBlock64::new([0u8; MAX_MAC_OUTPUT_LEN]);
    let mut t_buf = MacBlock64::new([0u8; MAX_MAC_OUTPUT_LEN]);
    let u = &mut u_buf.expose_secret_mut()[..block_len];
    let t = &mut t_buf.expose_secret_mut()[..block_len];

    for (chunk, block_index) in destination.chunks_mut(block_len).zip(1..=MAX_BLOCK_COUNT) {
        let mut mac = keyed.clone();
        if let Some(salt) = salt {
            mac.update(salt);
        }
        mac.update(&encode_block_counter(block_index));
        mac.finish_into(u);
        t.copy_from_slice(u);

        for _ in 1..iterations {
            let mut mac = keyed.clone();
            mac.update(u);
            mac.finish_into(u);
            xor_in_place(t, u);
        }

        chunk.copy_from_slice(&t[..chunk.len()]);
    }

    Ok(())
}

/// Derive PBKDF2 output directly into a secure-gate key buffer
///
/// Password never exposed outside the call; `out_key` is zeroized on drop.
#[inline(always)]
pub fn derive_secure_pbkdf2_key<const N: usize>(
    algorithm: MacAlgorithm,
    password: &PasswordBytes,
    salt: Option<&[u8]>,
    iterations: u32,
    out_key: &mut SpanBuffer<N>,
) -> Result<(), Pbkdf2Error> {
    derive(
        algorithm,
        password.expose_secret(),
        salt,
        iterations,
        out_key.expose_secret_mut(),
    )
}

#[inline(always)]
fn check_iterations(iterations: u32) -> Result<(), Pbkdf2Error> {
    if iterations < PBKDF2_MIN_ITER {
        debug!(iterations, "rejected PBKDF2 iteration count");
        return Err(Pbkdf2Error::InvalidArgument(
            "PBKDF2 iterations must be ≥1".into(),
        ));
    }
    Ok(())
}
