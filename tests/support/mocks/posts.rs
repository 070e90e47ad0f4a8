// tests/support/mocks/posts.rs
use async_trait::async_trait;
use bulletin_core::domain::errors::{DomainError, DomainResult};
use bulletin_core::domain::post::{
    NewPost, Post, PostBody, PostId, PostReadRepository, PostSlug, PostTitle, PostUpdate,
    PostWriteRepository,
};
use std::sync::Mutex;
use std::sync::atomic::{AtomicU32, Ordering};

/// Post store backed by a `Vec`, enforcing slug uniqueness on write the
/// way the `posts_slug_key` constraint does.
#[derive(Default)]
pub struct InMemoryPosts {
    posts: Mutex<Vec<Post>>,
    /// Inserts that fail with a conflict before touching the store,
    /// simulating a concurrent writer grabbing the slug first.
    racing_inserts: AtomicU32,
    slug_probes: AtomicU32,
}

impl InMemoryPosts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_racing_inserts(self, count: u32) -> Self {
        self.racing_inserts.store(count, Ordering::SeqCst);
        self
    }

    /// Seed a post directly; `slug: None` models an imported row.
    pub fn seed(&self, title: &str, slug: Option<&str>, published: bool) -> PostId {
        let mut posts = self.posts.lock().unwrap();
        let id = PostId::new(next_id(&posts)).unwrap();
        let now = super::fixed_now();
        posts.push(Post {
            id,
            title: PostTitle::new(title).unwrap(),
            slug: slug.map(|s| PostSlug::new(s).unwrap()),
            body: PostBody::new("body").unwrap(),
            excerpt: None,
            published,
            published_at: published.then_some(now),
            created_at: now,
            updated_at: now,
        });
        id
    }

    pub fn get(&self, id: PostId) -> Option<Post> {
        self.posts
            .lock()
            .unwrap()
            .iter()
            .find(|post| post.id == id)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.posts.lock().unwrap().len()
    }

    pub fn slug_probes(&self) -> u32 {
        self.slug_probes.load(Ordering::SeqCst)
    }

    fn slug_taken(posts: &[Post], slug: &PostSlug, exclude: Option<PostId>) -> bool {
        posts
            .iter()
            .any(|post| post.slug.as_ref() == Some(slug) && Some(post.id) != exclude)
    }
}

#[async_trait]
impl PostWriteRepository for InMemoryPosts {
    async fn insert(&self, new: NewPost) -> DomainResult<Post> {
        let racing = self.racing_inserts.load(Ordering::SeqCst);
        if racing > 0 {
            self.racing_inserts.store(racing - 1, Ordering::SeqCst);
            return Err(DomainError::Conflict("slug already exists".into()));
        }

        let mut posts = self.posts.lock().unwrap();
        if Self::slug_taken(&posts, &new.slug, None) {
            return Err(DomainError::Conflict("slug already exists".into()));
        }

        let post = Post {
            id: PostId::new(next_id(&posts))?,
            title: new.title,
            slug: Some(new.slug),
            body: new.body,
            excerpt: new.excerpt,
            published: new.published,
            published_at: new.published_at,
            created_at: new.created_at,
            updated_at: new.updated_at,
        };
        posts.push(post.clone());
        Ok(post)
    }

    async fn update(&self, update: PostUpdate) -> DomainResult<Post> {
        let mut posts = self.posts.lock().unwrap();
        if let Some(slug) = &update.slug {
            if Self::slug_taken(&posts, slug, Some(update.id)) {
                return Err(DomainError::Conflict("slug already exists".into()));
            }
        }

        let post = posts
            .iter_mut()
            .find(|post| post.id == update.id)
            .ok_or_else(|| DomainError::NotFound("post not found".into()))?;

        if let Some(title) = update.title {
            post.title = title;
        }
        if let Some(slug) = update.slug {
            post.slug = Some(slug);
        }
        if let Some(body) = update.body {
            post.body = body;
        }
        if let Some(excerpt) = update.excerpt {
            post.excerpt = excerpt;
        }
        if let Some(state) = update.publish_state {
            post.published = state.published;
            post.published_at = state.published_at;
        }
        post.updated_at = update.updated_at;
        Ok(post.clone())
    }

    async fn delete(&self, id: PostId) -> DomainResult<()> {
        let mut posts = self.posts.lock().unwrap();
        let before = posts.len();
        posts.retain(|post| post.id != id);
        if posts.len() == before {
            return Err(DomainError::NotFound("post not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl PostReadRepository for InMemoryPosts {
    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>> {
        Ok(self.get(id))
    }

    async fn find_by_slug(&self, slug: &PostSlug) -> DomainResult<Option<Post>> {
        Ok(self
            .posts
            .lock()
            .unwrap()
            .iter()
            .find(|post| post.slug.as_ref() == Some(slug))
            .cloned())
    }

    async fn slug_exists(&self, slug: &PostSlug, exclude: Option<PostId>) -> DomainResult<bool> {
        self.slug_probes.fetch_add(1, Ordering::SeqCst);
        let posts = self.posts.lock().unwrap();
        Ok(Self::slug_taken(&posts, slug, exclude))
    }

    async fn list_published(&self, limit: u32) -> DomainResult<Vec<Post>> {
        let mut published: Vec<Post> = self
            .posts
            .lock()
            .unwrap()
            .iter()
            .filter(|post| post.published)
            .cloned()
            .collect();
        published.sort_by(|a, b| {
            b.published_at
                .cmp(&a.published_at)
                .then(i64::from(b.id).cmp(&i64::from(a.id)))
        });
        published.truncate(limit as usize);
        Ok(published)
    }
}

fn next_id(posts: &[Post]) -> i64 {
    posts.iter().map(|post| i64::from(post.id)).max().unwrap_or(0) + 1
}
