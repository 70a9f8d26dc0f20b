/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

use std::thread;

use css_select::ComputedStyle;
use css_select::properties::{keywords, longhands};
use css_select::sharing::StylePool;
use servo_arc::Arc;

use crate::{init_logger, px};

fn style_with_width(width: i32) -> ComputedStyle {
    let mut style = ComputedStyle::initial_values();
    style.set::<longhands::Width>(keywords::Size::Set, Some(px(width)));
    style
}

#[test]
fn equal_styles_share_one_instance() {
    init_logger();
    let pool = StylePool::with_sharing(true);
    let first = pool.intern(style_with_width(10)).unwrap();
    let second = pool.intern(style_with_width(10)).unwrap();
    let other = pool.intern(style_with_width(20)).unwrap();

    assert!(Arc::ptr_eq(&first, &second));
    assert!(!Arc::ptr_eq(&first, &other));
    assert_eq!(pool.len(), 2);
    assert!(pool.contains(&first));
    assert!(!pool.contains(&Arc::new(style_with_width(10))));
}

#[test]
fn purge_drops_unused_styles() {
    init_logger();
    let pool = StylePool::with_sharing(true);
    let kept = pool.intern(style_with_width(1)).unwrap();
    drop(pool.intern(style_with_width(2)).unwrap());
    drop(pool.intern(style_with_width(3)).unwrap());

    assert_eq!(pool.purge(), 2);
    assert_eq!(pool.len(), 1);
    assert!(pool.contains(&kept));

    drop(kept);
    assert_eq!(pool.purge(), 1);
    assert!(pool.is_empty());
}

#[test]
fn without_sharing_nothing_is_pooled() {
    init_logger();
    let pool = StylePool::with_sharing(false);
    assert!(!pool.is_sharing());
    let first = pool.intern(style_with_width(10)).unwrap();
    let second = pool.intern(style_with_width(10)).unwrap();
    assert!(!Arc::ptr_eq(&first, &second));
    assert_eq!(first, second);
    assert!(pool.is_empty());
}

#[test]
fn sharing_is_on_by_default() {
    assert!(StylePool::default().is_sharing());
}

#[test]
fn clear() {
    let pool = StylePool::with_sharing(true);
    let style = pool.intern(style_with_width(10)).unwrap();
    pool.clear();
    assert!(!pool.contains(&style));
    assert_eq!(pool.len(), 0);
}

#[test]
fn concurrent_interning() {
    init_logger();
    let pool = StylePool::with_sharing(true);
    let styles: Vec<_> = thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| pool.intern(style_with_width(42)).unwrap()))
            .collect();
        handles.into_iter().map(|handle| handle.join().unwrap()).collect()
    });

    assert_eq!(pool.len(), 1);
    assert!(styles.windows(2).all(|pair| Arc::ptr_eq(&pair[0], &pair[1])));
}
