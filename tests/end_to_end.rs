use escape_field::{
    BandedPalette, Bgr, BmpFilePresenter, EscapeFieldRequest, FilePresenterPort, GridSize, Point,
    RasterBuffer, RenderController, Schedule, WorkerPoolConfig, compute_escape_field,
    convert_raw_file, generate_raster_buffer,
};
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::process::Command;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("escape_field_e2e_{}_{}", std::process::id(), name))
}

fn unit_window() -> EscapeFieldRequest {
    EscapeFieldRequest {
        width: 2,
        height: 2,
        rmin: -1.0,
        rmax: 1.0,
        imin: -1.0,
        imax: 1.0,
        max_iterations: 10,
    }
}

#[test]
fn test_two_by_two_window_colours_origin_black() {
    let pool = WorkerPoolConfig::new(NonZeroUsize::new(2), Schedule::default())
        .build_pool()
        .unwrap();

    let grid = compute_escape_field(&unit_window(), &pool, Schedule::default()).unwrap();
    let raster = generate_raster_buffer(&grid, &BandedPalette, &pool).unwrap();

    assert!(grid.values().iter().all(|&v| v < 10));
    assert_eq!(grid.get(Point { x: 1, y: 1 }), Some(0));
    assert_eq!(raster.pixel(Point { x: 1, y: 1 }), Some(Bgr::BLACK));
}

#[test]
fn test_single_pixel_bitmap_is_57_bytes() {
    let path = temp_path("single.bmp");
    let raster = RasterBuffer::from_data(GridSize::new(1, 1).unwrap(), vec![10, 20, 30]).unwrap();

    BmpFilePresenter::new().present(&raster, &path).unwrap();
    let written = std::fs::read(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(written.len(), 57);
    assert_eq!(&written[54..], &[10, 20, 30]);
}

#[test]
fn test_single_zero_value_converts_to_three_black_bytes() {
    let input = temp_path("zero.raw");
    let output = temp_path("zero.rgb");
    std::fs::write(&input, 0u32.to_le_bytes()).unwrap();

    let samples = convert_raw_file(&input, &output).unwrap();
    let written = std::fs::read(&output).unwrap();
    std::fs::remove_file(&input).unwrap();
    std::fs::remove_file(&output).unwrap();

    assert_eq!(samples, 1);
    assert_eq!(written, vec![0, 0, 0]);
}

#[test]
fn test_rendered_raw_grid_converts_to_the_bitmap_pixels() {
    let bmp = temp_path("pipeline.bmp");
    let raw = temp_path("pipeline.raw");
    let rgb = temp_path("pipeline.rgb");
    let request = EscapeFieldRequest {
        width: 16,
        height: 9,
        rmin: -2.0,
        rmax: 1.0,
        imin: -1.0,
        imax: 1.0,
        max_iterations: 300,
    };

    let mut controller = RenderController::new(BmpFilePresenter::new(), WorkerPoolConfig::default());
    controller.generate(&request).unwrap();
    controller.write(&bmp).unwrap();
    controller.write_raw(&raw).unwrap();
    convert_raw_file(&raw, &rgb).unwrap();

    let bitmap = std::fs::read(&bmp).unwrap();
    let samples = std::fs::read(&rgb).unwrap();
    for path in [&bmp, &raw, &rgb] {
        std::fs::remove_file(path).unwrap();
    }

    assert_eq!(bitmap.len(), 54 + 3 * 16 * 9);
    assert_eq!(&bitmap[54..], samples.as_slice());
}

#[test]
fn test_binary_exits_with_status_one_on_wrong_arity() {
    let output = Command::new(env!("CARGO_BIN_EXE_mandel"))
        .args(["800", "600", "-2.0"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(!output.stderr.is_empty());
}

#[test]
fn test_binary_renders_and_reports() {
    let path = temp_path("cli.bmp");

    let output = Command::new(env!("CARGO_BIN_EXE_mandel"))
        .args(["--output"])
        .arg(&path)
        .args(["4", "3", "-2", "1", "-1.5", "1.5"])
        .env("MANDEL_NUM_THREADS", "2")
        .env("MANDEL_SCHEDULE", "dynamic,1")
        .output()
        .unwrap();
    let written = std::fs::read(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout.contains("Processing time:"));
    assert!(stdout.contains("Threads: 2"));
    assert_eq!(written.len(), 54 + 3 * 4 * 3);
}

#[test]
fn test_binary_reports_unwritable_output() {
    let path = temp_path("missing_dir").join("out.bmp");

    let output = Command::new(env!("CARGO_BIN_EXE_mandel"))
        .arg("--output")
        .arg(&path)
        .args(["2", "2", "-1", "1", "-1", "1"])
        .output()
        .unwrap();

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.contains("out.bmp"));
}

#[test]
fn test_converter_binary_reports_missing_input() {
    let input = temp_path("absent.raw");

    let output = Command::new(env!("CARGO_BIN_EXE_raw_to_colour"))
        .arg("--input")
        .arg(&input)
        .arg("--output")
        .arg(temp_path("absent.rgb"))
        .output()
        .unwrap();

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.contains("absent.raw"));
}
