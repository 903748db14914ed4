use super::*;

use crate::data::feed;

#[test]
fn posts_by_filters_on_author_id() {
    let posts = feed::posts();
    let author = posts[0].author.user.id.clone();
    let mine = posts_by(&posts, &author);
    assert!(!mine.is_empty());
    assert!(mine.iter().all(|p| p.author.user.id == author));
}

#[test]
fn posts_by_unknown_author_is_empty() {
    let posts = feed::posts();
    assert!(posts_by(&posts, "no-such-user").is_empty());
}
