use crate::hex;
use digest::Digest;
use hmac::{digest::KeyInit, Hmac, Mac};
use std::{error, fmt, str::FromStr};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Error {
    UnknownAlgorithm { name: String },
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownAlgorithm { name } => write!(f, "Unknown algorithm {:?}", name),
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Algorithm {
    Sha1,
    Sha224,
    Sha256,
    Sha384,
    Sha512,
    Md2,
    Md4,
    Md5,
    Crc32,
    Crc32b,
    Adler32,
    Ripemd128,
    Ripemd160,
    Ripemd256,
    Ripemd320,
    Tiger,
    Tiger128,
    Tiger160,
    Whirlpool,
    Gost,
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self, Error> {
        match name {
            "sha1" => Ok(Self::Sha1),
            "sha224" => Ok(Self::Sha224),
            "sha256" => Ok(Self::Sha256),
            "sha384" => Ok(Self::Sha384),
            "sha512" => Ok(Self::Sha512),
            "md2" => Ok(Self::Md2),
            "md4" => Ok(Self::Md4),
            "md5" => Ok(Self::Md5),
            "crc32" => Ok(Self::Crc32),
            "crc32b" => Ok(Self::Crc32b),
            "adler32" => Ok(Self::Adler32),
            "ripemd128" => Ok(Self::Ripemd128),
            "ripemd160" => Ok(Self::Ripemd160),
            "ripemd256" => Ok(Self::Ripemd256),
            "ripemd320" => Ok(Self::Ripemd320),
            "tiger" => Ok(Self::Tiger),
            "tiger128" => Ok(Self::Tiger128),
            "tiger160" => Ok(Self::Tiger160),
            "whirlpool" => Ok(Self::Whirlpool),
            "gost" => Ok(Self::Gost),
            name => Err(Error::UnknownAlgorithm { name: name.to_string() }),
        }
    }
}

const CRC32: crc::Crc<u32> = crc::Crc::<u32>::new(&crc::CRC_32_BZIP2);

fn digest_with<D: Digest>(message: &[u8]) -> Vec<u8> {
    D::digest(message).to_vec()
}

/// Raw digest bytes for `message` under `algorithm`. Checksums render
/// big-endian; Tiger128/Tiger160 are the leading bytes of the Tiger digest.
pub fn digest(algorithm: Algorithm, message: impl AsRef<[u8]>) -> Vec<u8> {
    let message = message.as_ref();
    match algorithm {
        Algorithm::Sha1 => digest_with::<sha1::Sha1>(message),
        Algorithm::Sha224 => digest_with::<sha2::Sha224>(message),
        Algorithm::Sha256 => digest_with::<sha2::Sha256>(message),
        Algorithm::Sha384 => digest_with::<sha2::Sha384>(message),
        Algorithm::Sha512 => digest_with::<sha2::Sha512>(message),
        Algorithm::Md2 => digest_with::<md2::Md2>(message),
        Algorithm::Md4 => digest_with::<md4::Md4>(message),
        Algorithm::Md5 => digest_with::<md5::Md5>(message),
        Algorithm::Ripemd128 => digest_with::<ripemd::Ripemd128>(message),
        Algorithm::Ripemd160 => digest_with::<ripemd::Ripemd160>(message),
        Algorithm::Ripemd256 => digest_with::<ripemd::Ripemd256>(message),
        Algorithm::Ripemd320 => digest_with::<ripemd::Ripemd320>(message),
        Algorithm::Tiger => digest_with::<tiger::Tiger>(message),
        Algorithm::Tiger128 => {
            let mut digest = digest_with::<tiger::Tiger>(message);
            digest.truncate(16);
            digest
        }
        Algorithm::Tiger160 => {
            let mut digest = digest_with::<tiger::Tiger>(message);
            digest.truncate(20);
            digest
        }
        Algorithm::Whirlpool => digest_with::<whirlpool::Whirlpool>(message),
        Algorithm::Gost => digest_with::<gost94::Gost94Test>(message),
        Algorithm::Crc32 => CRC32.checksum(message).to_be_bytes().to_vec(),
        Algorithm::Crc32b => crc32fast::hash(message).to_be_bytes().to_vec(),
        Algorithm::Adler32 => {
            let mut adler = adler2::Adler32::new();
            adler.write_slice(message);
            adler.checksum().to_be_bytes().to_vec()
        }
    }
}

/// Lowercase hex rendering of the digest, two characters per byte.
pub fn hash(algorithm: Algorithm, message: impl AsRef<[u8]>) -> String {
    hex::encode(digest(algorithm, message))
}

/// The only algorithms offered for HMAC.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum HmacAlgorithm {
    Sha256,
    Sha1,
    Md5,
}

impl FromStr for HmacAlgorithm {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self, Error> {
        match name {
            "sha256" => Ok(Self::Sha256),
            "sha1" => Ok(Self::Sha1),
            "md5" => Ok(Self::Md5),
            name => Err(Error::UnknownAlgorithm { name: name.to_string() }),
        }
    }
}

fn hmac_with<M: Mac + KeyInit>(key: &[u8], message: &[u8]) -> Vec<u8> {
    let mut mac = <M as KeyInit>::new_from_slice(key).expect("HMAC accepts any key length");
    mac.update(message);
    mac.finalize().into_bytes().to_vec()
}

/// `0x`-prefixed lowercase hex rendering of the keyed digest.
pub fn hmac(algorithm: HmacAlgorithm, key: impl AsRef<[u8]>, message: impl AsRef<[u8]>) -> String {
    let (key, message) = (key.as_ref(), message.as_ref());
    let mac = match algorithm {
        HmacAlgorithm::Sha256 => hmac_with::<Hmac<sha2::Sha256>>(key, message),
        HmacAlgorithm::Sha1 => hmac_with::<Hmac<sha1::Sha1>>(key, message),
        HmacAlgorithm::Md5 => hmac_with::<Hmac<md5::Md5>>(key, message),
    };
    format!("0x{}", hex::encode(mac))
}
