use std::{
    ffi::{OsStr, OsString},
    path::{Path, PathBuf},
    process::Command,
    sync::LazyLock,
};

use regex::Regex;
use tracing::{debug, info, warn};

use super::device::{DeviceError, Swipe, SwipeDevice};

/// Used when `wm size` prints something unexpected.
pub const FALLBACK_SCREEN_SIZE: (i32, i32) = (1080, 2400);

static SIZE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)x(\d+)").expect("static regex"));

/// Android device reached through the `adb` command line client.
#[derive(Debug, Clone)]
pub struct AdbDevice {
    program: PathBuf,
    serial: String,
}

impl AdbDevice {
    /// Picks `serial`, or the first attached device when none is given.
    pub fn connect(serial: Option<&str>) -> Result<Self, DeviceError> {
        Self::connect_with("adb", serial)
    }

    pub fn connect_with(
        program: impl Into<PathBuf>,
        serial: Option<&str>,
    ) -> Result<Self, DeviceError> {
        let program = program.into();
        let listing = run(&program, ["devices"])?;
        let attached = parse_devices(&listing);
        debug!(?attached, "adb devices");

        let serial = match serial {
            Some(wanted) => attached
                .into_iter()
                .find(|s| s == wanted)
                .ok_or_else(|| DeviceError::NotFound(wanted.to_owned()))?,
            None => attached.into_iter().next().ok_or(DeviceError::NoDevice)?,
        };
        info!(%serial, "connected");
        Ok(Self { program, serial })
    }

    pub fn serial(&self) -> &str {
        &self.serial
    }

    fn shell<I, S>(&self, args: I) -> Result<String, DeviceError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let mut full: Vec<OsString> = vec!["-s".into(), self.serial.as_str().into(), "shell".into()];
        full.extend(args.into_iter().map(|a| a.as_ref().to_os_string()));
        run(&self.program, full)
    }

    /// Screen resolution in pixels, preferring an override set with `wm size`.
    pub fn screen_size(&self) -> Result<(i32, i32), DeviceError> {
        let output = self.shell(["wm", "size"])?;
        Ok(parse_screen_size(&output).unwrap_or_else(|| {
            warn!(output = output.trim(), "unrecognised `wm size` output, using fallback");
            FALLBACK_SCREEN_SIZE
        }))
    }
}

impl SwipeDevice for AdbDevice {
    fn send_swipe(&mut self, swipe: &Swipe) -> Result<(), DeviceError> {
        let args = [
            swipe.x1.to_string(),
            swipe.y1.to_string(),
            swipe.x2.to_string(),
            swipe.y2.to_string(),
            swipe.duration_ms.to_string(),
        ];
        self.shell(["input", "swipe"].into_iter().map(String::from).chain(args))?;
        Ok(())
    }
}

fn run<I, S>(program: &Path, args: I) -> Result<String, DeviceError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let mut cmd = Command::new(program);
    cmd.args(args);
    let output = cmd.output().map_err(|source| DeviceError::Spawn {
        program: program.display().to_string(),
        source,
    })?;
    if !output.status.success() {
        return Err(DeviceError::CommandFailed {
            command: format!("{cmd:?}"),
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_owned(),
        });
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Serials from `adb devices` whose state is `device` (not `offline`/`unauthorized`).
pub fn parse_devices(listing: &str) -> Vec<String> {
    listing
        .lines()
        .skip_while(|line| !line.starts_with("List of devices"))
        .skip(1)
        .filter_map(|line| {
            let mut cols = line.split_whitespace();
            match (cols.next(), cols.next()) {
                (Some(serial), Some("device")) => Some(serial.to_owned()),
                _ => None,
            }
        })
        .collect()
}

pub fn parse_screen_size(output: &str) -> Option<(i32, i32)> {
    let line = output
        .lines()
        .find(|l| l.starts_with("Override size"))
        .or_else(|| output.lines().find(|l| SIZE_RE.is_match(l)))?;
    let caps = SIZE_RE.captures(line)?;
    Some((caps[1].parse().ok()?, caps[2].parse().ok()?))
}
