use core::sync::atomic::{AtomicBool, Ordering};

use lock_api::RawMutex;

/// Plain spinlock. The console is a single logical task, so the lock only
/// serializes device access between that task and board-side log output.
pub struct RawSpinlock {
    lock: AtomicBool,
}

unsafe impl RawMutex for RawSpinlock {
    type GuardMarker = lock_api::GuardSend;
    const INIT: Self = Self {
        lock: AtomicBool::new(false),
    };

    fn lock(&self) {
        while self
            .lock
            .compare_exchange_weak(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_err()
        {
            while self.lock.load(Ordering::Relaxed) {
                core::hint::spin_loop();
            }
        }
    }

    fn try_lock(&self) -> bool {
        self.lock
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_ok()
    }

    unsafe fn unlock(&self) {
        self.lock.store(false, Ordering::Release);
    }
}

pub type Mutex<T> = lock_api::Mutex<RawSpinlock, T>;
