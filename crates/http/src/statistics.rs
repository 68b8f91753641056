//! Latency statistics for HTTP/1 channels.
//!
//! The channel that embeds an [`Http1ChannelStatistics`] adds to the two counters while its
//! streams wait on I/O; a statistics pipeline periodically reads and [`reset`]s them.
//!
//! [`reset`]: Http1ChannelStatistics::reset

use micro_diagnostics::package::{self, statistics_category_begin_range};
use micro_diagnostics::{Statistics, StatisticsCategory};

/// Statistics categories owned by the http package.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum HttpStatisticsCategory {
    Http1Channel = statistics_category_begin_range(package::HTTP),
}

impl HttpStatisticsCategory {
    #[inline]
    pub const fn category(self) -> StatisticsCategory {
        self as StatisticsCategory
    }
}

/// Category stamped on every [`Http1ChannelStatistics`].
pub const HTTP1_CHANNEL_STATISTICS_CATEGORY: StatisticsCategory = HttpStatisticsCategory::Http1Channel.category();

/// Time the streams of one HTTP/1 channel spent waiting for their I/O.
///
/// A record has exactly one owner, who ends it with [`cleanup`](Self::cleanup). It cannot
/// be duplicated:
///
/// ```compile_fail
/// use micro_http_token::statistics::Http1ChannelStatistics;
///
/// let stats = Http1ChannelStatistics::init();
/// let copy = stats.clone();
/// stats.cleanup();
/// copy.cleanup();
/// ```
#[derive(Debug, PartialEq, Eq)]
pub struct Http1ChannelStatistics {
    category: StatisticsCategory,
    /// Milliseconds outgoing requests spent queued before their I/O completed.
    pub pending_outgoing_stream_ms: u64,
    /// Milliseconds incoming responses spent queued before their I/O completed.
    pub pending_incoming_stream_ms: u64,
}

impl Http1ChannelStatistics {
    /// Creates a record with zeroed counters, stamped with
    /// [`HTTP1_CHANNEL_STATISTICS_CATEGORY`].
    pub fn init() -> Self {
        Self { category: HTTP1_CHANNEL_STATISTICS_CATEGORY, pending_outgoing_stream_ms: 0, pending_incoming_stream_ms: 0 }
    }

    #[inline]
    pub fn category(&self) -> StatisticsCategory {
        self.category
    }

    /// Zeroes both counters. The category is left untouched.
    pub fn reset(&mut self) {
        self.pending_outgoing_stream_ms = 0;
        self.pending_incoming_stream_ms = 0;
    }

    /// Releases the record.
    ///
    /// Nothing is owned today, but owners should still call this instead of dropping so
    /// that resources added later are released.
    pub fn cleanup(self) {}
}

impl Statistics for Http1ChannelStatistics {
    fn category(&self) -> StatisticsCategory {
        self.category
    }

    fn reset(&mut self) {
        Http1ChannelStatistics::reset(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_zeroes_counters_and_stamps_category() {
        let stats = Http1ChannelStatistics::init();
        assert_eq!(stats.pending_outgoing_stream_ms, 0);
        assert_eq!(stats.pending_incoming_stream_ms, 0);
        assert_eq!(stats.category(), HTTP1_CHANNEL_STATISTICS_CATEGORY);
        assert_eq!(HTTP1_CHANNEL_STATISTICS_CATEGORY, 0x200);
        stats.cleanup();
    }

    #[test]
    fn reset_keeps_category() {
        let mut stats = Http1ChannelStatistics::init();
        stats.pending_outgoing_stream_ms += 120;
        stats.pending_incoming_stream_ms += 35;

        stats.reset();
        assert_eq!(stats.pending_outgoing_stream_ms, 0);
        assert_eq!(stats.pending_incoming_stream_ms, 0);
        assert_eq!(stats.category(), HTTP1_CHANNEL_STATISTICS_CATEGORY);

        stats.pending_incoming_stream_ms += 7;
        stats.reset();
        assert_eq!(stats, Http1ChannelStatistics::init());
        stats.cleanup();
    }

    #[test]
    fn usable_through_the_statistics_trait() {
        let mut stats = Http1ChannelStatistics::init();
        stats.pending_outgoing_stream_ms = 9;

        let record: &mut dyn Statistics = &mut stats;
        record.reset();
        assert_eq!(record.category(), HttpStatisticsCategory::Http1Channel.category());
        assert_eq!(stats.pending_outgoing_stream_ms, 0);
    }

    #[test]
    fn category_lies_in_the_http_range() {
        let category = HTTP1_CHANNEL_STATISTICS_CATEGORY;
        assert!(category >= package::statistics_category_begin_range(package::HTTP));
        assert!(category <= package::statistics_category_end_range(package::HTTP));
    }
}
