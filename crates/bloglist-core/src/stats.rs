//! Pure aggregation helpers over blog collections.
//!
//! All functions are total: empty input yields zero or `None`, never an
//! error. Ties are broken in favor of the first-encountered blog or author,
//! so results are reproducible for any input order.

use crate::domain::Blog;

/// Number of blogs an author has written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorBlogCount {
    pub author: String,
    pub blogs: usize,
}

/// Total likes across an author's blogs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorLikeCount {
    pub author: String,
    pub likes: i64,
}

/// Sum of likes over every blog in the list.
pub fn total_likes(blogs: &[Blog]) -> i64 {
    blogs.iter().map(|blog| blog.likes).sum()
}

/// The blog with the most likes, or `None` for an empty list.
pub fn favorite_blog(blogs: &[Blog]) -> Option<&Blog> {
    blogs
        .iter()
        .reduce(|best, blog| if blog.likes > best.likes { blog } else { best })
}

/// The author with the most blogs and that count, or `None` for an empty
/// list.
pub fn most_blogs(blogs: &[Blog]) -> Option<AuthorBlogCount> {
    reduce_by_author(blogs, |_| 1).map(|(author, blogs)| AuthorBlogCount {
        author,
        blogs: blogs as usize,
    })
}

/// The author whose blogs have the highest like total, or `None` for an
/// empty list.
pub fn most_likes(blogs: &[Blog]) -> Option<AuthorLikeCount> {
    reduce_by_author(blogs, |blog| blog.likes)
        .map(|(author, likes)| AuthorLikeCount { author, likes })
}

/// Group blogs by author in first-encounter order, sum a per-blog weight,
/// and return the author with the greatest total. A strictly-greater
/// comparison keeps the earliest author on ties.
fn reduce_by_author(blogs: &[Blog], weight: impl Fn(&Blog) -> i64) -> Option<(String, i64)> {
    let mut totals: Vec<(String, i64)> = Vec::new();
    for blog in blogs {
        match totals.iter_mut().find(|(author, _)| *author == blog.author) {
            Some((_, total)) => *total += weight(blog),
            None => totals.push((blog.author.clone(), weight(blog))),
        }
    }
    totals
        .into_iter()
        .reduce(|best, entry| if entry.1 > best.1 { entry } else { best })
}

#[cfg(test)]
mod tests {
    use bson::oid::ObjectId;

    use super::*;

    fn blog(title: &str, author: &str, likes: i64) -> Blog {
        Blog {
            id: ObjectId::new(),
            title: title.to_string(),
            author: author.to_string(),
            url: "https://example.com/".to_string(),
            likes,
            user: None,
        }
    }

    fn listing() -> Vec<Blog> {
        vec![
            blog("React patterns", "Michael Chan", 7),
            blog("Go To Statement Considered Harmful", "Edsger W. Dijkstra", 5),
            blog("Canonical string reduction", "Edsger W. Dijkstra", 12),
            blog("First class tests", "Robert C. Martin", 10),
            blog("TDD harms architecture", "Robert C. Martin", 0),
            blog("Type wars", "Robert C. Martin", 2),
        ]
    }

    #[test]
    fn test_total_likes_of_empty_list_is_zero() {
        assert_eq!(total_likes(&[]), 0);
    }

    #[test]
    fn test_total_likes_of_single_blog_equals_its_likes() {
        let blogs = vec![blog("Canonical string reduction", "Edsger W. Dijkstra", 5)];
        assert_eq!(total_likes(&blogs), 5);
    }

    #[test]
    fn test_total_likes_sums_the_whole_list() {
        assert_eq!(total_likes(&listing()), 36);
    }

    #[test]
    fn test_favorite_of_empty_list_is_none() {
        assert!(favorite_blog(&[]).is_none());
    }

    #[test]
    fn test_favorite_is_the_blog_with_most_likes() {
        let blogs = listing();
        let favorite = favorite_blog(&blogs).unwrap();
        assert_eq!(favorite.title, "Canonical string reduction");
        assert_eq!(favorite.likes, 12);
    }

    #[test]
    fn test_favorite_tie_goes_to_the_first_encountered() {
        let blogs = vec![
            blog("React patterns", "Michael Chan", 7),
            blog("First class tests", "Robert C. Martin", 7),
        ];
        assert_eq!(favorite_blog(&blogs).unwrap().title, "React patterns");
    }

    #[test]
    fn test_most_blogs_of_empty_list_is_none() {
        assert!(most_blogs(&[]).is_none());
    }

    #[test]
    fn test_most_blogs_counts_per_author() {
        assert_eq!(
            most_blogs(&listing()).unwrap(),
            AuthorBlogCount {
                author: "Robert C. Martin".to_string(),
                blogs: 3,
            }
        );
    }

    #[test]
    fn test_most_blogs_tie_goes_to_the_first_encountered_author() {
        let blogs = vec![
            blog("React patterns", "Michael Chan", 7),
            blog("Type wars", "Robert C. Martin", 2),
            blog("Beyond the basics", "Michael Chan", 1),
            blog("First class tests", "Robert C. Martin", 10),
        ];
        assert_eq!(most_blogs(&blogs).unwrap().author, "Michael Chan");
    }

    #[test]
    fn test_most_likes_of_empty_list_is_none() {
        assert!(most_likes(&[]).is_none());
    }

    #[test]
    fn test_most_likes_sums_per_author() {
        assert_eq!(
            most_likes(&listing()).unwrap(),
            AuthorLikeCount {
                author: "Edsger W. Dijkstra".to_string(),
                likes: 17,
            }
        );
    }

    #[test]
    fn test_most_likes_tie_goes_to_the_first_encountered_author() {
        let blogs = vec![
            blog("React patterns", "Michael Chan", 7),
            blog("Type wars", "Robert C. Martin", 7),
        ];
        assert_eq!(most_likes(&blogs).unwrap().author, "Michael Chan");
    }
}
