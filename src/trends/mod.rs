// Pageview trend links — turn a topic list into a pageviews.wmcloud.org URL.
//
// The pageviews tool is only ever linked to, never called.

pub mod link;
