use std::path::{Path, PathBuf};
use std::process::Command;

use gifweave_core::decode::decode_sequence_file;
use gifweave_core::encode::{write_gif, EncodeOptions};
use gifweave_core::sequence::{Frame, FrameSequence};

fn scratch_dir(name: &str) -> PathBuf {
    let dir = PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join(name);
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn gifweave(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_gifweave"))
        .args(args)
        .output()
        .unwrap()
}

fn write_sample(path: &Path) {
    let frames = vec![
        Frame::filled(64, 48, [255, 0, 0, 255]),
        Frame::filled(64, 48, [0, 255, 0, 255]),
        Frame::filled(64, 48, [0, 0, 255, 255]),
    ];
    let sequence = FrameSequence::new(frames, vec![100, 200, 100], 0).unwrap();
    write_gif(&sequence, path, &EncodeOptions::preserving(&sequence)).unwrap();
}

#[test]
fn cli_info_reports_frames() {
    let dir = scratch_dir("cli_info");
    let input = dir.join("in.gif");
    write_sample(&input);

    let output = gifweave(&["info", input.to_str().unwrap()]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Frames: 3"), "stdout: {stdout}");
    assert!(stdout.contains("Size: 64x48"), "stdout: {stdout}");
    assert!(stdout.contains("Loop: forever"), "stdout: {stdout}");
}

#[test]
fn cli_trim_crops_every_frame() {
    let dir = scratch_dir("cli_trim");
    let input = dir.join("in.gif");
    let out = dir.join("out.gif");
    write_sample(&input);

    let output = gifweave(&[
        "trim",
        input.to_str().unwrap(),
        "-o",
        out.to_str().unwrap(),
        "--rect",
        "8,4,40,36",
    ]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let trimmed = decode_sequence_file(&out).unwrap();
    assert_eq!(trimmed.len(), 3);
    assert_eq!((trimmed.size().width, trimmed.size().height), (32, 32));
    assert_eq!(trimmed.durations(), &[100, 200, 100]);
}

#[test]
fn cli_trim_refuses_undersized_rect() {
    let dir = scratch_dir("cli_trim_small");
    let input = dir.join("in.gif");
    let out = dir.join("out.gif");
    write_sample(&input);

    for rect in ["0,0,10,10", "40,4,8,36"] {
        let output = gifweave(&[
            "trim",
            input.to_str().unwrap(),
            "-o",
            out.to_str().unwrap(),
            "--rect",
            rect,
        ]);
        assert!(!output.status.success(), "rect {rect} should be refused");
        assert!(!out.exists());
    }
}

#[test]
fn cli_decompose_writes_numbered_stills() {
    let dir = scratch_dir("cli_decompose");
    let input = dir.join("clip.gif");
    let frames_dir = dir.join("frames");
    write_sample(&input);

    let output = gifweave(&["decompose", input.to_str().unwrap(), "-o", frames_dir.to_str().unwrap()]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    for label in ["001", "002", "003"] {
        assert!(frames_dir.join(format!("clip_{label}.png")).is_file());
    }
}

#[test]
fn cli_missing_input_fails() {
    let dir = scratch_dir("cli_missing");
    let output = gifweave(&["info", dir.join("nope.gif").to_str().unwrap()]);
    assert!(!output.status.success());
}
