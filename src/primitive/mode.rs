use core::fmt;
use core::str::FromStr;

/// An fopen-style file mode such as `"r"`, `"rb"`, `"w+"` or `"x"`.
///
/// The mode is one of `r`, `w`, `a`, `x` or `c`, followed by any combination
/// of `+` (read and write), `b` and `t`. `b` and `t` are accepted and ignored.
///
/// | Mode | Read | Write | Create       | Truncate | Append |
/// |------|------|-------|--------------|----------|--------|
/// | `r`  | yes  | `+`   | no           | no       | no     |
/// | `w`  | `+`  | yes   | yes          | yes      | no     |
/// | `a`  | `+`  | yes   | yes          | no       | yes    |
/// | `x`  | `+`  | yes   | must not exist | no     | no     |
/// | `c`  | `+`  | yes   | yes          | no       | no     |
///
/// # Examples
///
/// ```rust
/// use http_factory::FileMode;
///
/// let mode: FileMode = "rb".parse()?;
/// assert!(mode.read() && !mode.write());
///
/// let mode: FileMode = "w+".parse()?;
/// assert!(mode.read() && mode.write() && mode.truncate());
///
/// assert!("q".parse::<FileMode>().is_err());
/// # Ok::<(), http_factory::primitive::InvalidMode>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileMode {
    access: Access,
    plus: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Access {
    Read,
    Write,
    Append,
    Exclusive,
    Create,
}

impl FileMode {
    /// Returns `true` if the file is opened for reading.
    pub const fn read(&self) -> bool {
        matches!(self.access, Access::Read) || self.plus
    }

    /// Returns `true` if the file is opened for writing.
    pub const fn write(&self) -> bool {
        !matches!(self.access, Access::Read) || self.plus
    }

    /// Returns `true` if writes go to the end of the file.
    pub const fn append(&self) -> bool {
        matches!(self.access, Access::Append)
    }

    /// Returns `true` if an existing file is truncated.
    pub const fn truncate(&self) -> bool {
        matches!(self.access, Access::Write)
    }

    /// Returns `true` if a missing file is created.
    pub const fn create(&self) -> bool {
        matches!(self.access, Access::Write | Access::Append | Access::Create)
    }

    /// Returns `true` if opening fails when the file already exists.
    pub const fn create_new(&self) -> bool {
        matches!(self.access, Access::Exclusive)
    }
}

/// The error returned when a string is not a valid [`FileMode`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid file mode `{0}`")]
pub struct InvalidMode(String);

impl InvalidMode {
    /// Returns the rejected mode.
    pub fn mode(&self) -> &str {
        &self.0
    }
}

impl FromStr for FileMode {
    type Err = InvalidMode;

    fn from_str(mode: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidMode(mode.to_owned());
        let mut chars = mode.chars();
        let access = match chars.next().ok_or_else(invalid)? {
            'r' => Access::Read,
            'w' => Access::Write,
            'a' => Access::Append,
            'x' => Access::Exclusive,
            'c' => Access::Create,
            _ => return Err(invalid()),
        };

        let mut plus = false;
        for flag in chars {
            match flag {
                '+' => plus = true,
                'b' | 't' => {}
                _ => return Err(invalid()),
            }
        }

        Ok(Self { access, plus })
    }
}

impl fmt::Display for FileMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let access = match self.access {
            Access::Read => "r",
            Access::Write => "w",
            Access::Append => "a",
            Access::Exclusive => "x",
            Access::Create => "c",
        };
        f.write_str(access)?;
        if self.plus {
            f.write_str("+")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_modes() {
        for mode in ["r", "rb", "rt"] {
            let mode: FileMode = mode.parse().unwrap();
            assert!(mode.read());
            assert!(!mode.write());
            assert!(!mode.create());
        }

        for mode in ["r+", "rb+", "r+b"] {
            let mode: FileMode = mode.parse().unwrap();
            assert!(mode.read() && mode.write());
            assert!(!mode.truncate());
        }
    }

    #[test]
    fn write_modes() {
        let w: FileMode = "w".parse().unwrap();
        assert!(!w.read() && w.write() && w.create() && w.truncate());

        let a: FileMode = "a+".parse().unwrap();
        assert!(a.read() && a.append() && a.create() && !a.truncate());

        let x: FileMode = "xb".parse().unwrap();
        assert!(x.create_new() && !x.create());

        let c: FileMode = "c".parse().unwrap();
        assert!(c.create() && !c.truncate() && !c.append());
    }

    #[test]
    fn invalid_modes() {
        for mode in ["", "q", "rw", "r-", "+r", "R"] {
            let error = mode.parse::<FileMode>().unwrap_err();
            assert_eq!(error.mode(), mode);
        }
    }

    #[test]
    fn display_normalizes() {
        assert_eq!("rb+".parse::<FileMode>().unwrap().to_string(), "r+");
        assert_eq!("wt".parse::<FileMode>().unwrap().to_string(), "w");
    }
}
