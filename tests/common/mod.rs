//! Common test utilities shared across integration tests.

use dhkx::{DhGroup, DhKey};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_core::{CryptoRng, RngCore};

/// Initialize test tracing (call once at the beginning of tests).
///
/// Subsequent calls are safe and will be ignored.
#[allow(dead_code)]
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::new("dhkx=trace");

    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(filter)
        .try_init();
}

/// One side of an exchange, holding its key pair and whatever the peer sent.
#[allow(dead_code)]
pub struct Peer {
    pub group: DhGroup,
    pub own: DhKey,
    pub received: Option<DhKey>,
}

#[allow(dead_code)]
impl Peer {
    pub fn new(group: &DhGroup) -> Self {
        let own = group
            .generate_private_key_default()
            .expect("key generation should succeed");
        Self {
            group: group.clone(),
            own,
            received: None,
        }
    }

    pub fn wire_public(&self) -> Vec<u8> {
        self.own.marshal_public()
    }

    pub fn receive(&mut self, bytes: &[u8]) {
        self.received = Some(DhKey::from_public_bytes(bytes));
    }

    pub fn shared_secret(&self) -> dhkx::Result<Vec<u8>> {
        let peer = self.received.as_ref().expect("peer value not received");
        Ok(self.group.compute_key(peer, &self.own)?.marshal_public())
    }
}

/// Runs a full exchange between two fresh peers and returns both secrets.
#[allow(dead_code)]
pub fn exchange(group: &DhGroup) -> (Vec<u8>, Vec<u8>) {
    let mut a = Peer::new(group);
    let mut b = Peer::new(group);

    let a_pub = a.wire_public();
    let b_pub = b.wire_public();
    a.receive(&b_pub);
    b.receive(&a_pub);

    (
        a.shared_secret().expect("a should derive a secret"),
        b.shared_secret().expect("b should derive a secret"),
    )
}

/// Emits all-zero output for the first `zeros` reads, then real randomness.
#[allow(dead_code)]
pub struct ZeroBiasedRng {
    zeros: usize,
    pub reads: usize,
    inner: StdRng,
}

#[allow(dead_code)]
impl ZeroBiasedRng {
    pub fn new(zeros: usize) -> Self {
        Self {
            zeros,
            reads: 0,
            inner: StdRng::seed_from_u64(0x5eed),
        }
    }
}

impl RngCore for ZeroBiasedRng {
    fn next_u32(&mut self) -> u32 {
        let mut buf = [0u8; 4];
        self.fill_bytes(&mut buf);
        u32::from_le_bytes(buf)
    }

    fn next_u64(&mut self) -> u64 {
        let mut buf = [0u8; 8];
        self.fill_bytes(&mut buf);
        u64::from_le_bytes(buf)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.reads += 1;
        if self.zeros > 0 {
            self.zeros -= 1;
            dest.fill(0);
        } else {
            self.inner.fill_bytes(dest);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl CryptoRng for ZeroBiasedRng {}

/// Succeeds for `ok_reads` reads (returning zeros), then fails every read.
#[allow(dead_code)]
pub struct FailingRng {
    ok_reads: usize,
}

#[allow(dead_code)]
impl FailingRng {
    pub fn new(ok_reads: usize) -> Self {
        Self { ok_reads }
    }
}

impl RngCore for FailingRng {
    fn next_u32(&mut self) -> u32 {
        0
    }

    fn next_u64(&mut self) -> u64 {
        0
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        dest.fill(0);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        if self.ok_reads == 0 {
            return Err(rand_core::Error::new("entropy source unavailable"));
        }
        self.ok_reads -= 1;
        dest.fill(0);
        Ok(())
    }
}

impl CryptoRng for FailingRng {}
