use super::{PostCommandService, service::normalize_excerpt};
use crate::{
    application::{
        dto::PostDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::post::{Post, PostBody, PostId, PostSlug, PostTitle, PostUpdate},
};

#[derive(Default)]
pub struct UpdatePostCommand {
    pub id: i64,
    pub title: Option<String>,
    pub body: Option<String>,
    /// `Some("")` clears the excerpt.
    pub excerpt: Option<String>,
    pub slug: Option<String>,
    pub publish: Option<bool>,
}

impl PostCommandService {
    pub async fn update_post(&self, command: UpdatePostCommand) -> ApplicationResult<PostDto> {
        let id = PostId::new(command.id)?;
        let mut post = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("post not found"))?;

        let now = self.clock.now();
        let mut update = PostUpdate::new(id, now);

        let title_opt = command.title.map(PostTitle::new).transpose()?;
        let body_opt = command.body.map(PostBody::new).transpose()?;
        let title_changed = title_opt
            .as_ref()
            .is_some_and(|title| title != &post.title);

        if title_opt.is_some() || body_opt.is_some() {
            let new_title = title_opt.unwrap_or_else(|| post.title.clone());
            let new_body = body_opt.unwrap_or_else(|| post.body.clone());
            post.set_content(new_title.clone(), new_body.clone(), now);
            update = update.with_title(new_title).with_body(new_body);
        }

        let slug = self
            .next_slug(&post, command.slug.as_deref(), title_changed)
            .await?;
        if post.slug.as_ref() != Some(&slug) {
            tracing::info!(post_id = %id, old = ?post.slug, new = %slug, "post slug changed");
            post.set_slug(slug.clone(), now);
            update = update.with_slug(slug);
        }

        if let Some(excerpt) = command.excerpt {
            update = update.with_excerpt(normalize_excerpt(Some(excerpt)));
        }

        if let Some(publish) = command.publish {
            if publish != post.published {
                if publish {
                    post.publish(now);
                } else {
                    post.unpublish(now);
                }
                update = update.with_publish_state(post.published, post.published_at);
            }
        }

        if update.is_empty() {
            return Ok(post.into());
        }

        let updated = self.write_repo.update(update).await?;
        Ok(updated.into())
    }

    /// Custom slug first; a changed title regenerates (excluding this
    /// post); otherwise the current slug is kept and only a missing one
    /// is filled in.
    async fn next_slug(
        &self,
        post: &Post,
        custom: Option<&str>,
        title_changed: bool,
    ) -> ApplicationResult<PostSlug> {
        if let Some(raw) = custom {
            return self.resolve_custom_slug(raw, Some(post.id)).await;
        }

        let slug = if title_changed {
            self.slug_service
                .generate_unique_slug(&post.title, Some(post.id))
                .await?
        } else {
            self.slug_service
                .update_slug_if_needed(post.id, &post.title, post.slug.as_ref())
                .await?
        };
        Ok(slug)
    }
}
