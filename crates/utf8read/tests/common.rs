#![allow(missing_docs, dead_code)]

use std::io::{self, Read};

use utf8read::{ByteSource, CodePoint, DecodeError, Decoder};

pub const HELLO: &str = "Hello, 本世界";

/// Decode every code point in `source`, stopping at the first error.
pub fn drain<S: ByteSource>(
    decoder: Decoder,
    mut source: S,
) -> (Vec<CodePoint>, Option<DecodeError<S::Error>>) {
    let mut out = Vec::new();
    loop {
        match decoder.decode(&mut source) {
            Ok(Some(cp)) => out.push(cp),
            Ok(None) => return (out, None),
            Err(e) => return (out, Some(e)),
        }
    }
}

pub fn render(cps: &[CodePoint]) -> String {
    cps.iter()
        .map(|cp| cp.to_char().expect("scalar value"))
        .collect()
}

/// A reader that hands out at most `step` bytes per `read` call and
/// interrupts every other call.
pub struct Trickle<'a> {
    pub data: &'a [u8],
    pub step: usize,
    pub interrupt: bool,
}

impl<'a> Trickle<'a> {
    pub fn new(data: &'a [u8], step: usize) -> Self {
        Self {
            data,
            step,
            interrupt: false,
        }
    }
}

impl Read for Trickle<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.interrupt = !self.interrupt;
        if self.interrupt {
            return Err(io::ErrorKind::Interrupted.into());
        }
        let n = buf.len().min(self.step).min(self.data.len());
        buf[..n].copy_from_slice(&self.data[..n]);
        self.data = &self.data[n..];
        Ok(n)
    }
}

/// A reader that yields `data` and then fails with `BrokenPipe`.
pub struct BrokenPipe<'a> {
    pub data: &'a [u8],
}

impl Read for BrokenPipe<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.data.is_empty() {
            return Err(io::ErrorKind::BrokenPipe.into());
        }
        self.data.read(buf)
    }
}
