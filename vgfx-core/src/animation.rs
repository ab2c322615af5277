/// Spin animation state and the background animation task
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crate::geometry::Coordinate;
use crate::transform;

/// Fixed parameters of the spin animation
#[derive(Debug, Clone, Copy)]
pub struct SpinParams {
    /// World-space offset applied before scaling
    pub offset: (f64, f64, f64),
    /// Uniform scale applied to the base vertices
    pub scale: f64,
    /// Fixed tilt about the y axis, radians
    pub tilt_y: f64,
    /// Fixed roll about the z axis, radians
    pub roll_z: f64,
    /// Screen-space translation applied last (typically the viewport center)
    pub center: (f64, f64),
    /// Per-tick angle increment, radians
    pub step: f64,
    /// Delay between ticks, measured from the end of the prior iteration
    pub period: Duration,
}

impl Default for SpinParams {
    fn default() -> Self {
        Self {
            offset: (0.0, 0.0, 0.0),
            scale: 40.0,
            tilt_y: 45.0_f64.to_radians(),
            roll_z: 25.0_f64.to_radians(),
            center: (0.0, 0.0),
            step: 10.0_f64.to_radians(),
            period: Duration::from_millis(100),
        }
    }
}

/// Animation state advanced once per tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SpinState {
    /// Current rotation about the x axis, radians
    pub angle: f64,
}

/// Advance the state by one tick
pub fn step(state: SpinState, params: &SpinParams) -> SpinState {
    SpinState {
        angle: state.angle + params.step,
    }
}

/// Derive the posed vertex list from the immutable base set.
///
/// Each operation is a full pass over the list, applied in the fixed
/// order translate, scale, rotate about x, rotate about y, rotate about
/// z, translate. The order is load-bearing: these passes do not commute.
pub fn pose(base: &[Coordinate], state: SpinState, params: &SpinParams) -> Vec<Coordinate> {
    let (ox, oy, oz) = params.offset;
    let vertices = transform::translate(base, ox, oy, oz);
    let vertices = transform::scale(&vertices, params.scale, params.scale, params.scale);
    let vertices = transform::rotate_x(&vertices, state.angle);
    let vertices = transform::rotate_y(&vertices, params.tilt_y);
    let vertices = transform::rotate_z(&vertices, params.roll_z);
    transform::translate(&vertices, params.center.0, params.center.1, 0.0)
}

/// Handle to the background spin task.
///
/// The task re-derives the posed vertex list from the immutable base set
/// each tick and publishes it whole into a mutex-guarded slot, so a
/// reader can never observe a half-written list. `stop` is explicit and
/// joins the thread; dropping the handle stops it too.
pub struct Spinner {
    snapshot: Arc<Mutex<Arc<Vec<Coordinate>>>>,
    cancel: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl Spinner {
    /// Spawn the spin task.
    ///
    /// `notify` runs after every published frame and is the "please
    /// re-render now" signal for the consumer.
    pub fn spawn<F>(base: Vec<Coordinate>, params: SpinParams, mut notify: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        let initial = Arc::new(pose(&base, SpinState::default(), &params));
        let snapshot = Arc::new(Mutex::new(initial));
        let cancel = Arc::new(AtomicBool::new(false));

        let slot = Arc::clone(&snapshot);
        let stop_flag = Arc::clone(&cancel);
        let handle = thread::spawn(move || {
            let mut state = SpinState::default();
            while !stop_flag.load(Ordering::Relaxed) {
                state = step(state, &params);
                let frame = Arc::new(pose(&base, state, &params));
                *slot.lock().unwrap_or_else(|e| e.into_inner()) = frame;
                notify();
                thread::sleep(params.period);
            }
        });

        Self {
            snapshot,
            cancel,
            handle: Some(handle),
        }
    }

    /// The most recently published vertex list
    pub fn snapshot(&self) -> Arc<Vec<Coordinate>> {
        Arc::clone(&self.snapshot.lock().unwrap_or_else(|e| e.into_inner()))
    }

    /// Signal the task to stop and wait for it to finish
    pub fn stop(&mut self) {
        self.cancel.store(true, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Wireframe;
    use approx::assert_relative_eq;
    use std::sync::atomic::AtomicUsize;

    fn neutral_params() -> SpinParams {
        SpinParams {
            offset: (0.0, 0.0, 0.0),
            scale: 1.0,
            tilt_y: 0.0,
            roll_z: 0.0,
            center: (0.0, 0.0),
            step: 0.1,
            period: Duration::from_millis(1),
        }
    }

    #[test]
    fn test_step_advances_angle() {
        let params = neutral_params();
        let state = step(SpinState::default(), &params);
        assert_relative_eq!(state.angle, 0.1);
        assert_relative_eq!(step(state, &params).angle, 0.2);
    }

    #[test]
    fn test_neutral_pose_is_base() {
        let base = Wireframe::cube(1.0).vertices;
        let posed = pose(&base, SpinState::default(), &neutral_params());
        assert_eq!(posed.len(), base.len());
        for (orig, result) in base.iter().zip(&posed) {
            assert_relative_eq!(result.x, orig.x, epsilon = 1e-12);
            assert_relative_eq!(result.y, orig.y, epsilon = 1e-12);
            assert_relative_eq!(result.z, orig.z, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_pose_applies_center_last() {
        let base = vec![Coordinate::position(0.0, 0.0, 0.0)];
        let params = SpinParams {
            center: (100.0, 50.0),
            ..neutral_params()
        };
        // The origin is fixed under scale and rotation, so only the final
        // translate moves it
        let posed = pose(&base, SpinState { angle: 1.0 }, &params);
        assert_relative_eq!(posed[0].x, 100.0, epsilon = 1e-12);
        assert_relative_eq!(posed[0].y, 50.0, epsilon = 1e-12);
    }

    #[test]
    fn test_spinner_publishes_and_stops() {
        let base = Wireframe::cube(1.0).vertices;
        let ticks = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&ticks);

        let mut spinner = Spinner::spawn(base.clone(), neutral_params(), move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        thread::sleep(Duration::from_millis(50));
        assert!(ticks.load(Ordering::SeqCst) > 0);
        assert_eq!(spinner.snapshot().len(), base.len());

        spinner.stop();
        let after_stop = ticks.load(Ordering::SeqCst);
        thread::sleep(Duration::from_millis(20));
        assert_eq!(ticks.load(Ordering::SeqCst), after_stop);
    }
}
