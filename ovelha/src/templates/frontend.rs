//! Vue 3 template contents
//!
//! Components bind values with `v-text` rather than mustache interpolation so
//! the emitted markup never contains a Handlebars expression.

/// npm manifest
pub const PACKAGE_JSON: &str = r#"{
  "name": "{{artifact_id}}-frontend",
  "version": "0.1.0",
  "private": true,
  "type": "module",
  "scripts": {
    "dev": "vite",
    "build": "vite build",
    "preview": "vite preview"
  },
  "dependencies": {
    "axios": "^1.4.0",
    "bootstrap": "^5.3.0",
    "vue": "^3.3.4",
    "vue-router": "^4.2.0"
  },
  "devDependencies": {
    "@vitejs/plugin-vue": "^4.2.3",
    "vite": "^4.0.0"
  }
}
"#;

/// Host page
pub const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{{title}}</title>
    <link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/bootstrap@5.3.0/dist/css/bootstrap.min.css">
  </head>
  <body>
    <div id="app"></div>
    <script type="module" src="/src/main.js"></script>
  </body>
</html>
"#;

/// Vite configuration
pub const VITE_CONFIG_JS: &str = r"import { defineConfig } from 'vite';
import vue from '@vitejs/plugin-vue';

export default defineConfig({
  plugins: [vue()],
  server: {
    port: {{dev_port}},
  },
});
";

/// Runtime configuration read by Vite
pub const ENV_FILE: &str = r"VITE_APP_TITLE={{title}}
VITE_API_BASE_URL={{api_base_url}}
";

/// Root shell with one navigation entry per component
pub const APP_VUE: &str = r#"<template>
  <div class="container mt-5">
    <h1>{{title}}</h1>
    <nav class="mb-4">
{{#each classes}}
      <router-link class="me-3" to="/{{route_segment}}">{{plural_label}}</router-link>
{{/each}}
    </nav>
    <router-view></router-view>
  </div>
</template>

<script>
export default {
  name: 'App',
};
</script>
"#;

/// Bootstrap wiring shell and router
pub const MAIN_JS: &str = r"import { createApp } from 'vue';
import App from './App.vue';
import router from './router';

createApp(App).use(router).mount('#app');
";

/// Router table with lazily imported components
pub const ROUTER_JS: &str = r"import { createRouter, createWebHistory } from 'vue-router';

const routes = [
{{#each classes}}
  {
    path: '/{{route_segment}}',
    name: '{{class_name}}',
    component: () => import('./components/{{component_name}}.vue'),
  },
{{/each}}
];

export default createRouter({
  history: createWebHistory(),
  routes,
});
";

/// Per-class form-and-list component
pub const COMPONENT_VUE: &str = r#"<template>
  <div class="container mt-4">
    <h2>{{class_name}}</h2>
    <form @submit.prevent="submitForm">
{{#each fields}}
      <div class="mb-3">
        <label for="{{name}}" class="form-label">{{label}}</label>
{{#if is_checkbox}}
        <input type="checkbox" class="form-check-input" id="{{name}}" v-model="formData.{{name}}">
{{else}}
        <input type="{{input_type}}" class="form-control" id="{{name}}" v-model{{model_modifier}}="formData.{{name}}">
{{/if}}
      </div>
{{/each}}
      <button type="submit" class="btn btn-primary" v-text="editingId === null ? 'Create' : 'Update'"></button>
      <button v-if="editingId !== null" type="button" class="btn btn-secondary ms-2" @click="resetForm">Cancel</button>
    </form>

    <h3 class="mt-5">{{plural_label}}</h3>
    <table class="table table-striped">
      <thead>
        <tr>
          <th>ID</th>
{{#each fields}}
          <th>{{label}}</th>
{{/each}}
          <th>Actions</th>
        </tr>
      </thead>
      <tbody>
        <tr v-for="item in items" :key="item.id">
          <td v-text="item.id"></td>
{{#each fields}}
          <td v-text="item.{{name}}"></td>
{{/each}}
          <td>
            <button class="btn btn-warning me-2" @click="editItem(item.id)">Edit</button>
            <button class="btn btn-danger" @click="deleteItem(item.id)">Delete</button>
          </td>
        </tr>
      </tbody>
    </table>
  </div>
</template>

<script>
import axios from 'axios';

const API_BASE = import.meta.env.VITE_API_BASE_URL || '{{api_base_url}}';
const RESOURCE_URL = `${API_BASE}/{{route_segment}}`;

const emptyForm = () => ({{empty_form}});

export default {
  name: '{{component_name}}',
  data() {
    return {
      formData: emptyForm(),
      items: [],
      editingId: null,
    };
  },
  methods: {
    async fetchItems() {
      try {
        const response = await axios.get(RESOURCE_URL);
        this.items = response.data;
      } catch (error) {
        console.error('Failed to load {{plural_label}}', error);
      }
    },
    async submitForm() {
      try {
        if (this.editingId === null) {
          await axios.post(RESOURCE_URL, this.formData);
        } else {
          await axios.put(`${RESOURCE_URL}/${this.editingId}`, this.formData);
        }
        this.resetForm();
        await this.fetchItems();
      } catch (error) {
        console.error('Failed to save {{class_name}}', error);
      }
    },
    async editItem(id) {
      try {
        const response = await axios.get(`${RESOURCE_URL}/${id}`);
        this.formData = { ...response.data };
        this.editingId = id;
      } catch (error) {
        console.error('Failed to load {{class_name}}', error);
      }
    },
    async deleteItem(id) {
      try {
        await axios.delete(`${RESOURCE_URL}/${id}`);
        if (this.editingId === id) {
          this.resetForm();
        }
        await this.fetchItems();
      } catch (error) {
        console.error('Failed to delete {{class_name}}', error);
      }
    },
    resetForm() {
      this.formData = emptyForm();
      this.editingId = null;
    },
  },
  created() {
    this.fetchItems();
  },
};
</script>
"#;
