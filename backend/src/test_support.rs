//! Test utilities for the backend crate.
//!
//! This module provides shared helpers for both unit tests (in `src/`) and
//! integration tests (in `tests/`). It is only compiled when running tests.

pub mod cap_fs {
    //! Capability-safe filesystem helpers for tests.
    //!
    //! The backend forbids direct `std::fs` calls. These helpers provide common
    //! read/write/existence/listing operations built on `cap_std::fs::Dir` so
    //! test suites can share consistent, policy-compliant file access.

    use std::ffi::OsString;
    use std::io;
    use std::path::Path;

    use cap_std::{ambient_authority, fs::Dir};

    /// Read a UTF-8 text file through `cap_std`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use padron::test_support::cap_fs::{read_file_to_string, write_file};
    ///
    /// let path = std::env::temp_dir().join("cap-fs-read-example.txt");
    /// write_file(&path, b"hello\n")?;
    ///
    /// let content = read_file_to_string(&path)?;
    /// assert_eq!(content, "hello\n");
    /// # Ok::<(), std::io::Error>(())
    /// ```
    pub fn read_file_to_string(path: &Path) -> io::Result<String> {
        let (parent, file_name) = parent_and_file_name(path)?;
        let directory = Dir::open_ambient_dir(parent, ambient_authority())?;
        directory.read_to_string(Path::new(&file_name))
    }

    /// Write bytes to a file through `cap_std`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use padron::test_support::cap_fs::{read_file_to_string, write_file};
    ///
    /// let path = std::env::temp_dir().join("cap-fs-write-example.txt");
    /// write_file(&path, b"snapshot\n")?;
    /// assert_eq!(read_file_to_string(&path)?, "snapshot\n");
    /// # Ok::<(), std::io::Error>(())
    /// ```
    pub fn write_file(path: &Path, contents: &[u8]) -> io::Result<()> {
        let (parent, file_name) = parent_and_file_name(path)?;
        let directory = Dir::open_ambient_dir(parent, ambient_authority())?;
        directory.write(Path::new(&file_name), contents)
    }

    /// Return true when `path` exists, false when it does not.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use padron::test_support::cap_fs::{path_exists, write_file};
    ///
    /// let path = std::env::temp_dir().join("cap-fs-exists-example.txt");
    /// write_file(&path, b"exists\n")?;
    /// assert!(path_exists(&path));
    /// # Ok::<(), std::io::Error>(())
    /// ```
    pub fn path_exists(path: &Path) -> bool {
        let Ok((parent, file_name)) = parent_and_file_name(path) else {
            return false;
        };
        let Ok(directory) = Dir::open_ambient_dir(parent, ambient_authority()) else {
            return false;
        };
        directory.exists(Path::new(&file_name))
    }

    /// Create a directory and any missing parents through `cap_std`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use padron::test_support::cap_fs::{create_directory, path_exists};
    ///
    /// let directory = std::env::temp_dir().join("cap-fs-create-example");
    /// create_directory(&directory)?;
    /// assert!(path_exists(&directory));
    /// # Ok::<(), std::io::Error>(())
    /// ```
    pub fn create_directory(path: &Path) -> io::Result<()> {
        Dir::create_ambient_dir_all(path, ambient_authority())
    }

    /// List the entry names of a directory through `cap_std`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cap_std::{ambient_authority, fs::Dir};
    /// use padron::test_support::cap_fs::{directory_entries, write_file};
    ///
    /// let directory = std::env::temp_dir().join("cap-fs-entries-example");
    /// Dir::create_ambient_dir_all(&directory, ambient_authority())?;
    /// write_file(&directory.join("entry.txt"), b"listed\n")?;
    ///
    /// let names = directory_entries(&directory)?;
    /// assert!(names.contains(&"entry.txt".to_string()));
    /// # Ok::<(), std::io::Error>(())
    /// ```
    pub fn directory_entries(path: &Path) -> io::Result<Vec<String>> {
        let directory = Dir::open_ambient_dir(path, ambient_authority())?;
        let mut names = Vec::new();
        for entry in directory.entries()? {
            let entry = entry?;
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        Ok(names)
    }

    fn parent_and_file_name(path: &Path) -> io::Result<(&Path, OsString)> {
        let parent = path.parent().unwrap_or_else(|| Path::new("."));
        let file_name = path.file_name().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                "path must include a file or directory name",
            )
        })?;
        Ok((parent, file_name.to_os_string()))
    }
}

pub mod storage {
    //! Disposable storage roots for profile store tests.

    use tempfile::TempDir;

    use crate::outbound::persistence::DirProfileStore;

    /// Open a [`DirProfileStore`] rooted in a fresh temporary directory.
    ///
    /// The returned [`TempDir`] guard removes the directory when dropped, so
    /// callers must keep it alive for the duration of the test.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use padron::test_support::cap_fs::path_exists;
    /// use padron::test_support::storage::temp_profile_store;
    ///
    /// let (root, _store) = temp_profile_store();
    /// assert!(path_exists(root.path()));
    /// ```
    ///
    /// # Panics
    /// Panics when the temporary directory cannot be created or opened.
    #[must_use]
    pub fn temp_profile_store() -> (TempDir, DirProfileStore) {
        let root = TempDir::new().expect("create temporary storage root");
        let store = DirProfileStore::open(root.path()).expect("open profile store");
        (root, store)
    }
}
