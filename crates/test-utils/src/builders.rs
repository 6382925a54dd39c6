use fstalk::source::mask::{
    IN_CLOSE_WRITE, IN_CREATE, IN_DELETE, IN_MODIFY, IN_MOVED_FROM, IN_MOVED_TO, IN_MOVE_SELF,
    IN_OPEN,
};
use fstalk::source::RawRecord;

/// Builder for a single raw record.
///
/// ```ignore
/// let rec = RecordBuilder::new(IN_CREATE).name("x").isdir().build();
/// ```
#[derive(Debug, Clone)]
pub struct RecordBuilder {
    mask: u32,
    cookie: u32,
    name: String,
}

impl RecordBuilder {
    pub fn new(mask: u32) -> Self {
        Self {
            mask,
            cookie: 0,
            name: String::new(),
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn cookie(mut self, cookie: u32) -> Self {
        self.cookie = cookie;
        self
    }

    pub fn isdir(mut self) -> Self {
        self.mask |= fstalk::source::mask::IN_ISDIR;
        self
    }

    pub fn build(self) -> RawRecord {
        RawRecord::new(self.mask, self.cookie, self.name)
    }
}

pub fn moved_from(cookie: u32, name: &str) -> RawRecord {
    RecordBuilder::new(IN_MOVED_FROM).cookie(cookie).name(name).build()
}

pub fn moved_to(cookie: u32, name: &str) -> RawRecord {
    RecordBuilder::new(IN_MOVED_TO).cookie(cookie).name(name).build()
}

pub fn move_self() -> RawRecord {
    RecordBuilder::new(IN_MOVE_SELF).build()
}

pub fn created(name: &str) -> RawRecord {
    RecordBuilder::new(IN_CREATE).name(name).build()
}

pub fn deleted(name: &str) -> RawRecord {
    RecordBuilder::new(IN_DELETE).name(name).build()
}

pub fn modified(name: &str) -> RawRecord {
    RecordBuilder::new(IN_MODIFY).name(name).build()
}

pub fn opened(name: &str) -> RawRecord {
    RecordBuilder::new(IN_OPEN).name(name).build()
}

pub fn closed_write(name: &str) -> RawRecord {
    RecordBuilder::new(IN_CLOSE_WRITE).name(name).build()
}
