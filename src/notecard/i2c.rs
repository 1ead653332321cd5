//! Notecard serial-over-I²C transport.
//!
//! The Notecard exposes a byte stream over I²C with a tiny framing layer:
//!
//! ```text
//!  host → card (data)   [len][len bytes of the request line]
//!  host → card (query)  [0x00][n]          then read n + 2 bytes:
//!  card → host          [available][n][n bytes of response]
//! ```
//!
//! Requests longer than one chunk are split; after every
//! `SEGMENT_MAX_LEN` bytes the host pauses so the card's receive buffer
//! can drain.  The response is polled until a complete `\n`-terminated
//! line has arrived.  All waiting is done with [`DelayNs`], so the elapsed
//! time is tracked by summing delays rather than reading a clock.

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::{Error as _, I2c};
use log::warn;

use super::NotecardError;
use super::transport::{NotecardTransport, ResponseBuf};
use crate::config::AlarmConfig;

const CHUNK_DELAY_MS: u32 = 20;
const SEGMENT_MAX_LEN: usize = 250;
const SEGMENT_DELAY_MS: u32 = 250;
const POLL_DELAY_MS: u32 = 10;
const RESET_SYNC_RETRIES: usize = 3;
const RESET_DRAIN_MS: u32 = 500;

/// Largest frame on the wire: 255 payload bytes plus the two header bytes.
const FRAME_CAP: usize = 257;

pub struct I2cTransport<I2C, D> {
    i2c: I2C,
    delay: D,
    address: u8,
    max_chunk: u8,
    timeout_ms: u32,
}

impl<I2C: I2c, D: DelayNs> I2cTransport<I2C, D> {
    pub fn new(i2c: I2C, delay: D, address: u8, max_chunk: u8, timeout_ms: u32) -> Self {
        Self {
            i2c,
            delay,
            address,
            max_chunk: max_chunk.max(1),
            timeout_ms,
        }
    }

    pub fn from_config(i2c: I2C, delay: D, config: &AlarmConfig) -> Self {
        Self::new(
            i2c,
            delay,
            config.notecard_i2c_address,
            config.notecard_i2c_max_chunk,
            config.notecard_timeout_ms,
        )
    }

    /// Give the bus and delay back.
    pub fn release(self) -> (I2C, D) {
        (self.i2c, self.delay)
    }

    fn transmit(&mut self, data: &[u8]) -> Result<(), NotecardError> {
        let mut frame = [0u8; FRAME_CAP];
        let mut sent_in_segment = 0usize;
        let mut chunks = data.chunks(usize::from(self.max_chunk)).peekable();

        while let Some(chunk) = chunks.next() {
            frame[0] = chunk.len() as u8;
            frame[1..=chunk.len()].copy_from_slice(chunk);
            self.i2c
                .write(self.address, &frame[..=chunk.len()])
                .map_err(bus_error)?;

            if chunks.peek().is_none() {
                break;
            }
            sent_in_segment += chunk.len();
            if sent_in_segment > SEGMENT_MAX_LEN {
                sent_in_segment = 0;
                self.delay.delay_ms(SEGMENT_DELAY_MS);
            }
            self.delay.delay_ms(CHUNK_DELAY_MS);
        }
        Ok(())
    }

    /// Ask for `requested` bytes.  Returns the card's remaining byte count;
    /// the data lands in `frame[2..2 + requested]`.
    fn receive(&mut self, requested: u8, frame: &mut [u8; FRAME_CAP]) -> Result<u8, NotecardError> {
        self.i2c
            .write(self.address, &[0x00, requested])
            .map_err(bus_error)?;
        let len = usize::from(requested) + 2;
        self.i2c
            .read(self.address, &mut frame[..len])
            .map_err(bus_error)?;

        if frame[1] != requested {
            warn!(
                "notecard i2c: asked for {} bytes, card sent {}",
                requested, frame[1]
            );
            return Err(NotecardError::Protocol);
        }
        Ok(frame[0])
    }

    /// Read until nothing is left or the drain window closes.
    /// Returns `(anything_read, non_control_bytes_seen)`.
    fn drain(&mut self) -> Result<(bool, bool), NotecardError> {
        let mut frame = [0u8; FRAME_CAP];
        let mut requested = 0u8;
        let mut waited_ms = 0u32;
        let mut found = false;
        let mut garbage = false;

        loop {
            let available = self.receive(requested, &mut frame)?;
            let data = &frame[2..2 + usize::from(requested)];
            found |= !data.is_empty();
            garbage |= data.iter().any(|b| !b.is_ascii_control());

            if available > 0 {
                requested = available.min(self.max_chunk);
                continue;
            }
            requested = 0;
            if waited_ms >= RESET_DRAIN_MS {
                return Ok((found, garbage));
            }
            self.delay.delay_ms(POLL_DELAY_MS);
            waited_ms += POLL_DELAY_MS;
        }
    }
}

impl<I2C: I2c, D: DelayNs> NotecardTransport for I2cTransport<I2C, D> {
    fn transact(&mut self, request: &[u8], response: &mut ResponseBuf) -> Result<(), NotecardError> {
        self.transmit(request)?;
        response.clear();

        let mut frame = [0u8; FRAME_CAP];
        let mut requested = 0u8;
        let mut waited_ms = 0u32;

        loop {
            let available = self.receive(requested, &mut frame)?;
            response
                .extend_from_slice(&frame[2..2 + usize::from(requested)])
                .map_err(|()| NotecardError::ResponseTooLarge)?;

            if available > 0 {
                requested = available.min(self.max_chunk);
                continue;
            }
            requested = 0;

            if response.last() == Some(&b'\n') {
                return Ok(());
            }
            if waited_ms >= self.timeout_ms {
                return Err(NotecardError::Timeout);
            }
            self.delay.delay_ms(POLL_DELAY_MS);
            waited_ms += POLL_DELAY_MS;
        }
    }

    fn reset(&mut self) -> Result<(), NotecardError> {
        for attempt in 1..=RESET_SYNC_RETRIES {
            // A bare newline ends any partial request the card is holding;
            // its reply is an empty line.
            self.transmit(b"\n")?;
            self.delay.delay_ms(CHUNK_DELAY_MS);

            let (found, garbage) = self.drain()?;
            if found && !garbage {
                return Ok(());
            }
            warn!(
                "notecard i2c: resync attempt {} failed (found={}, garbage={})",
                attempt, found, garbage
            );
        }
        Err(NotecardError::Protocol)
    }
}

fn bus_error<E: embedded_hal::i2c::Error>(e: E) -> NotecardError {
    warn!("notecard i2c: bus error {:?}", e.kind());
    NotecardError::Bus
}
