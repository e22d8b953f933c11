use leptos::prelude::*;

/// Scoped hold on an "in flight" flag.
///
/// `acquire` sets the flag and hands out the guard; dropping the guard clears
/// it. Every exit path of the holder (success, error, early return, unwind)
/// releases the flag exactly once. At most one guard exists per flag.
#[must_use = "the flag is released as soon as the guard is dropped"]
pub struct SubmittingGuard {
    flag: RwSignal<bool>,
}

impl SubmittingGuard {
    /// Returns `None` if the flag is already held.
    pub fn acquire(flag: RwSignal<bool>) -> Option<Self> {
        if flag.try_get_untracked().unwrap_or(true) {
            return None;
        }
        flag.set(true);
        Some(Self { flag })
    }
}

impl Drop for SubmittingGuard {
    fn drop(&mut self) {
        // The owning component may already be gone.
        let _ = self.flag.try_set(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_sets_and_releases_flag() {
        let owner = Owner::new();
        owner.set();
        let flag = RwSignal::new(false);

        let guard = SubmittingGuard::acquire(flag).expect("flag is free");
        assert!(flag.get_untracked());
        drop(guard);
        assert!(!flag.get_untracked());
    }

    #[test]
    fn test_second_acquire_is_refused() {
        let owner = Owner::new();
        owner.set();
        let flag = RwSignal::new(false);

        let _held = SubmittingGuard::acquire(flag).expect("flag is free");
        assert!(SubmittingGuard::acquire(flag).is_none());
        assert!(flag.get_untracked());
    }

    #[test]
    fn test_flag_released_on_error_path() {
        let owner = Owner::new();
        owner.set();
        let flag = RwSignal::new(false);

        let failing = || -> Result<(), String> {
            let _guard = SubmittingGuard::acquire(flag).ok_or("busy")?;
            Err("evaluation failed".to_string())
        };
        assert!(failing().is_err());
        assert!(!flag.get_untracked());
    }

    #[test]
    fn test_release_after_disposal_is_noop() {
        let owner = Owner::new();
        owner.set();
        let flag = RwSignal::new(false);
        let guard = SubmittingGuard::acquire(flag).expect("flag is free");

        flag.dispose();
        drop(guard);
        assert!(flag.try_get_untracked().is_none());
    }
}
