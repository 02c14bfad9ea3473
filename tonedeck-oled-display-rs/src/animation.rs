//! Logo animation.
//!
//! [`LogoAnimation`] is a tick-driven state machine, not a blocking loop:
//! the caller invokes [`tick()`](LogoAnimation::tick) once per main-loop
//! iteration and each call does a bounded amount of work (erase the frame
//! and blit at most one logo).
//!
//! ```text
//!          start()            last frame drawn            next tick
//!  Idle ───────────▶ Playing ─────────────────▶ Done ───────────────▶ Idle
//!                      │                         ▲
//!                      └──── cancel() + tick ────┘
//! ```
//!
//! Entering `Done` erases the frame, so the status composer gets a clean
//! buffer back. Every frame the animation leaves behind is either one
//! complete transform frame or a fully cleared buffer.
//!
//! What each frame looks like is decided by a [`LogoTransform`].
//! [`WipeReveal`], [`SlideIn`] and [`StaticHold`] are provided.

use embedded_graphics::{
    geometry::{Point, Size},
    primitives::Rectangle,
};

use crate::blit::{blit_region, BlitMode};
use crate::bitmap::BitmapAsset;
use crate::catalog;
use crate::frame::FrameBuffer;

/// Lifecycle phase of a [`LogoAnimation`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AnimationPhase {
    /// Not running; the status composer owns the frame.
    #[default]
    Idle,
    /// Drawing frames.
    Playing,
    /// Finished or cancelled; the frame has been cleared. Becomes `Idle`
    /// on the next tick.
    Done,
}

/// Progress counters of a [`LogoAnimation`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AnimationState {
    /// Frames drawn so far in this run.
    pub frame: u32,
    /// Frames in a full run.
    pub total_frames: u32,
    /// Current phase.
    pub phase: AnimationPhase,
}

/// Placement of the logo for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogoFrame {
    /// Where the top-left corner of `source` lands on screen.
    pub origin: Point,
    /// Part of the logo to draw, in logo coordinates.
    pub source: Rectangle,
    /// How the logo combines with the (freshly erased) frame.
    pub mode: BlitMode,
}

/// Maps an animation frame index to a logo placement.
///
/// Implementations must be pure: the same arguments give the same frame.
pub trait LogoTransform {
    /// Placement for frame `frame` of `total_frames` on a `screen`-sized
    /// display.
    fn frame(&self, logo: &BitmapAsset, frame: u32, total_frames: u32, screen: Size) -> LogoFrame;
}

/// Top-left corner that centres `logo` on `screen`.
pub fn centred(logo: &BitmapAsset, screen: Size) -> Point {
    Point::new(
        (screen.width as i32 - logo.width() as i32) / 2,
        (screen.height as i32 - logo.height() as i32) / 2,
    )
}

fn whole(logo: &BitmapAsset) -> Rectangle {
    Rectangle::new(Point::zero(), logo.size())
}

/// The logo, centred, for the whole run.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticHold;

impl LogoTransform for StaticHold {
    fn frame(&self, logo: &BitmapAsset, _frame: u32, _total_frames: u32, screen: Size) -> LogoFrame {
        LogoFrame {
            origin: centred(logo, screen),
            source: whole(logo),
            mode: BlitMode::Normal,
        }
    }
}

/// Centred logo uncovered left to right over `reveal_frames`, then held.
#[derive(Debug, Clone, Copy)]
pub struct WipeReveal {
    /// Frames until the logo is fully visible.
    pub reveal_frames: u32,
}

impl LogoTransform for WipeReveal {
    fn frame(&self, logo: &BitmapAsset, frame: u32, _total_frames: u32, screen: Size) -> LogoFrame {
        let width = if frame + 1 >= self.reveal_frames {
            logo.width()
        } else {
            // u64: width * frames could overflow u32 for long reveals.
            (logo.width() as u64 * (frame as u64 + 1) / self.reveal_frames as u64) as u32
        };
        LogoFrame {
            origin: centred(logo, screen),
            source: Rectangle::new(Point::zero(), Size::new(width, logo.height())),
            mode: BlitMode::Normal,
        }
    }
}

/// Logo drops in from above the screen and lands centred on the last frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct SlideIn;

impl LogoTransform for SlideIn {
    fn frame(&self, logo: &BitmapAsset, frame: u32, total_frames: u32, screen: Size) -> LogoFrame {
        let target = centred(logo, screen);
        let start = -(logo.height() as i32);
        let y = if total_frames == 0 || frame + 1 >= total_frames {
            target.y
        } else {
            let travel = (target.y - start) as i64;
            start + (travel * (frame as i64 + 1) / total_frames as i64) as i32
        };
        LogoFrame {
            origin: Point::new(target.x, y),
            source: whole(logo),
            mode: BlitMode::Normal,
        }
    }
}

/// Tick-driven logo animation.
pub struct LogoAnimation<T> {
    transform: T,
    logo: &'static BitmapAsset,
    state: AnimationState,
    cancel_requested: bool,
}

impl<T: LogoTransform> LogoAnimation<T> {
    /// An idle animation of the catalog logo lasting `total_frames` ticks.
    pub fn new(transform: T, total_frames: u32) -> Self {
        Self::with_logo(transform, total_frames, &catalog::LOGO)
    }

    /// An idle animation of an arbitrary asset.
    pub fn with_logo(transform: T, total_frames: u32, logo: &'static BitmapAsset) -> Self {
        Self {
            transform,
            logo,
            state: AnimationState {
                frame: 0,
                total_frames,
                phase: AnimationPhase::Idle,
            },
            cancel_requested: false,
        }
    }

    /// Current phase.
    pub fn phase(&self) -> AnimationPhase {
        self.state.phase
    }

    /// Current counters.
    pub fn state(&self) -> AnimationState {
        self.state
    }

    /// Returns `true` unless the animation is idle.
    pub fn is_active(&self) -> bool {
        self.state.phase != AnimationPhase::Idle
    }

    /// Begin (or restart) a run from frame 0. Nothing is drawn until the
    /// next [`tick()`](Self::tick).
    pub fn start(&mut self) {
        #[cfg(feature = "defmt")]
        defmt::info!("logo animation start ({} frames)", self.state.total_frames);

        self.state.frame = 0;
        self.state.phase = AnimationPhase::Playing;
        self.cancel_requested = false;
    }

    /// Request early termination. Takes effect on the next tick, which
    /// clears the frame and enters `Done`.
    ///
    /// Returns `false` (and does nothing) unless the animation is playing.
    pub fn cancel(&mut self) -> bool {
        if self.state.phase != AnimationPhase::Playing {
            return false;
        }
        self.cancel_requested = true;
        true
    }

    /// Advance by one tick and return the phase after it.
    pub fn tick(&mut self, frame: &mut FrameBuffer) -> AnimationPhase {
        match self.state.phase {
            AnimationPhase::Idle => {}
            AnimationPhase::Done => {
                self.state.phase = AnimationPhase::Idle;
            }
            AnimationPhase::Playing => {
                if self.cancel_requested || self.state.frame >= self.state.total_frames {
                    #[cfg(feature = "defmt")]
                    defmt::info!(
                        "logo animation done after {} frames (cancelled: {})",
                        self.state.frame,
                        self.cancel_requested
                    );

                    frame.erase();
                    self.cancel_requested = false;
                    self.state.phase = AnimationPhase::Done;
                } else {
                    let placement = self.transform.frame(
                        self.logo,
                        self.state.frame,
                        self.state.total_frames,
                        FrameBuffer::bounds().size,
                    );
                    frame.erase();
                    blit_region(frame, self.logo, placement.source, placement.origin, placement.mode);
                    self.state.frame += 1;
                }
            }
        }
        self.state.phase
    }
}

// ── Tests ────────────────────────────────────────────────────────────────
