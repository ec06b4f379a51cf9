//! Pixel: The atomic unit of image data.
//!
//! # Channel Depth
//!
//! Channels are stored at Q16 depth: each magnitude is a [`Quantum`]
//! (`u16`) ranging over `0..=QUANTUM_MAX`. 8-bit component values scale up
//! by `* 257`, so `0xFF` maps exactly to `QUANTUM_MAX`.
//!
//! # Change Reporting
//!
//! Every mutating operation returns whether it actually changed the pixel.
//! Callers that track pending writes aggregate these booleans explicitly;
//! there is no hidden notification channel.

use bitflags::bitflags;

/// A single channel magnitude (Q16 depth).
pub type Quantum = u16;

/// The maximum magnitude a channel can hold.
pub const QUANTUM_MAX: Quantum = u16::MAX;

/// Identifies one channel of a pixel.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Channel {
    /// The red channel.
    Red,
    /// The green channel.
    Green,
    /// The blue channel.
    Blue,
    /// The alpha (opacity) channel.
    Alpha,
}

bitflags! {
    /// A subset of pixel channels, for broadcast operations.
    ///
    /// Masks can be combined using bitwise OR.
    ///
    /// # Example
    /// ```
    /// use porthole::Channels;
    /// let mask = Channels::RED | Channels::ALPHA;
    /// ```
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Channels: u8 {
        /// The red channel.
        const RED = 0b0001;
        /// The green channel.
        const GREEN = 0b0010;
        /// The blue channel.
        const BLUE = 0b0100;
        /// The alpha (opacity) channel.
        const ALPHA = 0b1000;
        /// The three color channels.
        const RGB = Self::RED.bits() | Self::GREEN.bits() | Self::BLUE.bits();
        /// Every channel.
        const ALL = Self::RGB.bits() | Self::ALPHA.bits();
    }
}

impl std::fmt::Debug for Channels {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        bitflags::parser::to_writer(self, f)
    }
}

impl From<Channel> for Channels {
    #[inline]
    fn from(channel: Channel) -> Self {
        match channel {
            Channel::Red => Self::RED,
            Channel::Green => Self::GREEN,
            Channel::Blue => Self::BLUE,
            Channel::Alpha => Self::ALPHA,
        }
    }
}

/// A four-channel pixel value.
///
/// Equality is structural across all four channels. `Pixel` is `Copy`;
/// a pixel handed out by a read is an independent value, and a pixel
/// written into a container is copied into every target slot.
#[repr(C)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pixel {
    /// Red channel magnitude.
    pub red: Quantum,
    /// Green channel magnitude.
    pub green: Quantum,
    /// Blue channel magnitude.
    pub blue: Quantum,
    /// Alpha (opacity) channel magnitude.
    pub alpha: Quantum,
}

impl Pixel {
    /// Create a new pixel from four channel magnitudes.
    #[inline]
    pub const fn new(red: Quantum, green: Quantum, blue: Quantum, alpha: Quantum) -> Self {
        Self { red, green, blue, alpha }
    }

    /// Create a fully opaque pixel from three color magnitudes.
    #[inline]
    pub const fn opaque(red: Quantum, green: Quantum, blue: Quantum) -> Self {
        Self::new(red, green, blue, QUANTUM_MAX)
    }

    /// Create a pixel from 8-bit components, scaled to Quantum depth.
    #[inline]
    pub const fn from_rgba8(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self::new(
            red as Quantum * 257,
            green as Quantum * 257,
            blue as Quantum * 257,
            alpha as Quantum * 257,
        )
    }

    /// Opaque black (0, 0, 0).
    pub const BLACK: Self = Self::opaque(0, 0, 0);
    /// Opaque white.
    pub const WHITE: Self = Self::opaque(QUANTUM_MAX, QUANTUM_MAX, QUANTUM_MAX);
    /// Opaque red.
    pub const RED: Self = Self::opaque(QUANTUM_MAX, 0, 0);
    /// Opaque green.
    pub const GREEN: Self = Self::opaque(0, QUANTUM_MAX, 0);
    /// Opaque blue.
    pub const BLUE: Self = Self::opaque(0, 0, QUANTUM_MAX);
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    /// Get one channel's magnitude.
    #[inline]
    pub const fn channel(&self, channel: Channel) -> Quantum {
        match channel {
            Channel::Red => self.red,
            Channel::Green => self.green,
            Channel::Blue => self.blue,
            Channel::Alpha => self.alpha,
        }
    }

    /// Set one channel's magnitude.
    ///
    /// Returns `true` if the stored value actually changed.
    #[inline]
    pub fn set_channel(&mut self, channel: Channel, value: Quantum) -> bool {
        let slot = match channel {
            Channel::Red => &mut self.red,
            Channel::Green => &mut self.green,
            Channel::Blue => &mut self.blue,
            Channel::Alpha => &mut self.alpha,
        };
        let changed = *slot != value;
        *slot = value;
        changed
    }

    /// Set every channel in `channels` to `value`.
    ///
    /// Returns `true` if any channel actually changed.
    pub fn set_channels(&mut self, channels: Channels, value: Quantum) -> bool {
        let mut changed = false;
        if channels.contains(Channels::RED) {
            changed |= self.set_channel(Channel::Red, value);
        }
        if channels.contains(Channels::GREEN) {
            changed |= self.set_channel(Channel::Green, value);
        }
        if channels.contains(Channels::BLUE) {
            changed |= self.set_channel(Channel::Blue, value);
        }
        if channels.contains(Channels::ALPHA) {
            changed |= self.set_channel(Channel::Alpha, value);
        }
        changed
    }

    /// Overwrite this pixel with another.
    ///
    /// Returns `true` if the stored value actually changed.
    #[inline]
    pub fn assign(&mut self, other: Self) -> bool {
        let changed = *self != other;
        *self = other;
        changed
    }

    /// Set the red channel (builder pattern).
    #[inline]
    #[must_use]
    pub const fn with_red(mut self, red: Quantum) -> Self {
        self.red = red;
        self
    }

    /// Set the green channel (builder pattern).
    #[inline]
    #[must_use]
    pub const fn with_green(mut self, green: Quantum) -> Self {
        self.green = green;
        self
    }

    /// Set the blue channel (builder pattern).
    #[inline]
    #[must_use]
    pub const fn with_blue(mut self, blue: Quantum) -> Self {
        self.blue = blue;
        self
    }

    /// Set the alpha channel (builder pattern).
    #[inline]
    #[must_use]
    pub const fn with_alpha(mut self, alpha: Quantum) -> Self {
        self.alpha = alpha;
        self
    }
}

impl From<(Quantum, Quantum, Quantum)> for Pixel {
    #[inline]
    fn from((red, green, blue): (Quantum, Quantum, Quantum)) -> Self {
        Self::opaque(red, green, blue)
    }
}

impl From<(Quantum, Quantum, Quantum, Quantum)> for Pixel {
    #[inline]
    fn from((red, green, blue, alpha): (Quantum, Quantum, Quantum, Quantum)) -> Self {
        Self::new(red, green, blue, alpha)
    }
}

impl std::fmt::Debug for Pixel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Pixel({:04x} {:04x} {:04x} {:04x})",
            self.red, self.green, self.blue, self.alpha
        )
    }
}
