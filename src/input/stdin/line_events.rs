use std::io::BufRead;

use log::warn;

use crate::controllers::explorer::events::ExplorerEvent;

/// Reads explorer events from text, one command per line.
///
/// * `x y` selects the point `x + yi`
/// * `-` or `none` is a pick outside the plot
/// * a single character is a key press (`q`/`Q` quit, others are ignored)
///
/// Blank and unparsable lines are skipped. End of input ends the stream.
pub struct LineEventSource<R: BufRead> {
    reader: R,
    line: String,
}

impl<R: BufRead> LineEventSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: String::new(),
        }
    }
}

impl<R: BufRead> Iterator for LineEventSource<R> {
    type Item = ExplorerEvent;

    fn next(&mut self) -> Option<ExplorerEvent> {
        loop {
            self.line.clear();

            match self.reader.read_line(&mut self.line) {
                Ok(0) => return None,
                Ok(_) => {}
                Err(err) => {
                    warn!("stopped reading events: {}", err);
                    return None;
                }
            }

            match parse_line(&self.line) {
                Ok(Some(event)) => return Some(event),
                Ok(None) => continue,
                Err(message) => warn!("skipping line {:?}: {}", self.line.trim_end(), message),
            }
        }
    }
}

fn parse_line(line: &str) -> Result<Option<ExplorerEvent>, String> {
    let line = line.trim();

    if line.is_empty() {
        return Ok(None);
    }

    if line == "-" || line.eq_ignore_ascii_case("none") {
        return Ok(Some(ExplorerEvent::Selection { x: None, y: None }));
    }

    let mut chars = line.chars();
    if let (Some(key), None) = (chars.next(), chars.next()) {
        if !key.is_ascii_digit() {
            return Ok(ExplorerEvent::from_key(key));
        }
    }

    let fields: Vec<&str> = line.split_whitespace().collect();
    let [x, y] = fields[..] else {
        return Err(format!("expected two coordinates, got {} fields", fields.len()));
    };

    let x = x.parse::<f64>().map_err(|err| format!("bad x coordinate: {}", err))?;
    let y = y.parse::<f64>().map_err(|err| format!("bad y coordinate: {}", err))?;

    Ok(Some(ExplorerEvent::selection(x, y)))
}
