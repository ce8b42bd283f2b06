// src/services/classifier.rs

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Pcm,
    Pcb,
    Design,
    Unknown,
}

/// Rules are checked in this order; the first hit wins.
const RULES: &[(Stream, &[&str])] = &[
    (Stream::Pcm, &["pcm", "physics", "math"]),
    (Stream::Pcb, &["pcb", "bio", "biology"]),
    (Stream::Design, &["design", "art", "creative"]),
];

pub fn detect_stream(msg: &str) -> Stream {
    let msg_lower = msg.to_lowercase();

    RULES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| msg_lower.contains(k)))
        .map(|(stream, _)| *stream)
        .unwrap_or(Stream::Unknown)
}

pub fn suggestion_for(stream: Stream) -> &'static str {
    match stream {
        Stream::Pcm => "You might like: Aeronautical / Mechanical / CS (PCM paths).",
        Stream::Pcb => "You might like: Medicine, Biotechnology, Pharmacy.",
        Stream::Design => "You might like: UI/UX, Product Design, Architecture.",
        Stream::Unknown => {
            "Try typing a stream (PCM/PCB) or interest (Design) for targeted suggestions."
        }
    }
}

pub fn classify(msg: &str) -> &'static str {
    suggestion_for(detect_stream(msg))
}
