use std::io;
use std::sync::{Arc, Mutex};

use tracing::Level;

use crate::terminal::logging::{DevteamFormatter, routed_writer};

#[derive(Clone, Default)]
pub struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl SharedBuf {
    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl io::Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Runs `f` under the devteam subscriber and returns what reached
/// `(stdout, stderr)`, without colors.
pub fn capture_split(f: impl FnOnce()) -> (String, String) {
    colored::control::set_override(false);

    let out = SharedBuf::default();
    let err = SharedBuf::default();
    let (out_writer, err_writer) = (out.clone(), err.clone());

    let subscriber = tracing_subscriber::fmt()
        .with_writer(routed_writer(move || out_writer.clone(), move || err_writer.clone()))
        .with_ansi(false)
        .with_max_level(Level::TRACE)
        .event_format(DevteamFormatter)
        .finish();

    tracing::subscriber::with_default(subscriber, f);

    (out.contents(), err.contents())
}
